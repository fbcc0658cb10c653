use serde::{Deserialize, Serialize};

/// One multiple-choice prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub choices: Vec<String>,
    pub answer: String,
    pub explanation: String,
}

impl Question {
    /// Exact, case-sensitive match against the stored answer.
    pub fn is_correct(&self, option: &str) -> bool {
        self.answer == option
    }

    /// `answer` appears among `choices` and there is something to choose between.
    pub fn is_well_formed(&self) -> bool {
        self.choices.len() >= 2 && self.choices.iter().any(|c| c == &self.answer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub summary: String,
    pub questions: Vec<Question>,
}

/// Root document served by the topics endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyData {
    #[serde(default)]
    pub topics: Vec<Topic>,
}
