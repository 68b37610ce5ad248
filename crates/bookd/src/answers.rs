//! The placeholder answer served for every question.
//!
//! The provider does not generate content. Whatever was asked, it returns
//! this fixed text in the structure the book page expects.

use book_common::AnswerPayload;

pub fn placeholder_answer() -> AnswerPayload {
    AnswerPayload {
        title: "On the Nature of Understanding".to_string(),
        explanation: vec![
            "The question you have posed touches upon fundamental principles that have occupied scholars for centuries. To address this matter properly, we must first establish a framework of understanding.".to_string(),
            "Consider that knowledge is not merely accumulated facts, but rather a tapestry of interconnected concepts that inform our comprehension of the world around us.".to_string(),
            "In examining your inquiry more closely, we find that the answer lies not in a simple declaration, but in the careful consideration of multiple perspectives and their synthesis.".to_string(),
        ],
        practical_guidance: vec![
            "Begin by observing the patterns that emerge in your daily experience, for theory without practice remains incomplete.".to_string(),
            "Document your findings systematically, allowing each observation to inform the next.".to_string(),
            "Seek discourse with others who have traveled similar paths of inquiry, for wisdom is often refined through dialogue.".to_string(),
        ],
        notes: vec![
            "Note well: This understanding may shift as new evidence presents itself. The mark of a true scholar is the willingness to revise one's conclusions when warranted.".to_string(),
            "Further reading may be found in the classical texts, though direct experience often proves the most instructive teacher.".to_string(),
        ],
    }
}
