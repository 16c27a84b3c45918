//! Completion model identifiers.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// A completion model offered by the intelligence sidebar.
///
/// The strum labels are the wire names sent to the inference endpoint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum ModelId {
    #[default]
    #[strum(serialize = "llama3.1-70b")]
    Llama3_1_70b,
    #[strum(serialize = "llama3.1-8b")]
    Llama3_1_8b,
    #[strum(serialize = "mistral-large")]
    MistralLarge,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn wire_names_round_trip() {
        assert_eq!(ModelId::Llama3_1_70b.to_string(), "llama3.1-70b");
        assert_eq!(
            ModelId::from_str("mistral-large").unwrap(),
            ModelId::MistralLarge
        );
        assert_eq!(
            ModelId::from_str("LLAMA3.1-8B").unwrap(),
            ModelId::Llama3_1_8b
        );
    }

    #[test]
    fn default_is_the_large_llama() {
        assert_eq!(ModelId::default(), ModelId::Llama3_1_70b);
    }
}
