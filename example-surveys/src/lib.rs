//! Example survey definitions used by the tests and for trying out respondents.

pub mod customer_feedback;
pub mod donation;

pub use customer_feedback::{
    COMMENT, FEEDBACK_JSON, SATISFACTION, SCREENSHOT, customer_feedback,
};
pub use donation::{DONATION, EXPERIENCE, donation};

#[cfg(test)]
mod tests {
    use super::*;
    use survey_elements_types::SurveyDefinition;

    #[test]
    fn definitions_are_valid() {
        customer_feedback().check().unwrap();
        donation().check().unwrap();
        SurveyDefinition::from_json(FEEDBACK_JSON).unwrap();
    }

    #[test]
    fn definition_survives_json() {
        let definition = customer_feedback();
        let json = definition.to_json().unwrap();
        assert_eq!(SurveyDefinition::from_json(&json).unwrap(), definition);
    }
}
