use serde::{Deserialize, Serialize};

/// What to answer when a request carries no question.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmptyQuestionPolicy {
    /// Answer with the zone SOA record.
    #[default]
    Soa,

    /// Empty answer with response code FORMERR.
    FormErr,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CompatConfig {
    #[serde(default)]
    pub empty_question: EmptyQuestionPolicy,
}
