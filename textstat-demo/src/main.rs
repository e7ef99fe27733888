use textstat_core::algo::bigram::predict_next;
use textstat_core::algo::tfidf;

fn main() {
    // Predict the next character from the bigram frequencies of the input.
    // "helo" instead of "hello": with "ll" in both words the most frequent
    // successor of the final 'l' would trivially be 'l' again.
    let text = "helo helo  hell";
    match predict_next(text) {
        Some(next_char) => {
            println!("For string {:?} the next possible character is {:?}.", text, next_char);
            println!("So it becomes {:?}.", format!("{}{}", text, next_char));
        }
        None => println!("No prediction possible for {:?}.", text),
    }

    // Degenerate inputs degrade to "no prediction" rather than failing.
    println!("Prediction for the empty string: {:?}", predict_next(""));
    println!("Prediction for \"a\": {:?}", predict_next("a"));

    // Score each word of each document against the whole corpus.
    let documents = ["The cat", "The cat sat on the mat", "My name is Mat"];
    println!("\nTF-IDF scores for the corpus {:?}:", documents);
    for (document, scores) in documents.iter().zip(tfidf::score(&documents)) {
        println!("  {:?}", document);
        for (word, score) in &scores {
            println!("    {:<8} {:.4}", word, score);
        }
    }
}
