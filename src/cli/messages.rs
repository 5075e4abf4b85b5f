use crate::error::BookError;

/// Turns an error from a command into the text shown at the prompt.
pub fn render_error(err: &BookError) -> String {
    match err {
        BookError::InvalidPhone { value } => format!(
            "Please enter valid data. '{}' is not a phone number: use exactly 10 digits.",
            value
        ),
        BookError::InvalidBirthday { value } => format!(
            "Please enter valid data. '{}' is not a valid date: use DD.MM.YYYY.",
            value
        ),
        BookError::BlankField { field } => format!("Please enter valid data. The {} cannot be blank.", field),
        BookError::WrongArguments { usage } => format!("Please enter valid data. Usage: {}", usage),
        BookError::NotFound { name } => format!("Contact {} not found. Please enter an existing contact.", name),
        BookError::AlreadyExists { name } => format!("Contact with the name {} already exists.", name),
        other => format!("Error: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_format() {
        let msg = render_error(&BookError::InvalidPhone { value: "12".into() });
        assert!(msg.contains("10 digits"));
        let msg = render_error(&BookError::InvalidBirthday { value: "1.1.1".into() });
        assert!(msg.contains("DD.MM.YYYY"));
    }

    #[test]
    fn not_found_names_the_contact() {
        let msg = render_error(&BookError::NotFound { name: "Zed".into() });
        assert!(msg.contains("Zed"));
    }

    #[test]
    fn usage_is_shown() {
        let msg = render_error(&BookError::WrongArguments { usage: "phone <name>" });
        assert!(msg.ends_with("Usage: phone <name>"));
    }
}
