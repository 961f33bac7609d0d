//! End-to-end flows over a value store and an error store, driven the way a
//! text input drives them: change events, blur, submit.

use std::sync::{Arc, Mutex};

use formstate::prelude::*;

fn required_name_and_email() -> FieldValidations {
    FieldValidations::builder()
        .field("name")
        .rule(rules::required)
        .field("email")
        .rule(rules::required)
        .build()
}

// =============================================================================
// Single input
// =============================================================================

mod input {
    use super::*;

    #[test]
    fn test_blur_validates_current_value() {
        let values = ValueStore::new(form_values([("name", "")]));
        let errors = ErrorStore::new(
            FieldValidations::builder()
                .field("name")
                .rule(rules::required)
                .build(),
        );

        let value = values.value("name");
        let valid = errors.validate_input_value("name", value.as_deref());

        assert!(!valid);
        assert_eq!(errors.input_errors("name").len(), 1);
        assert!(errors.first_error("name").unwrap().contains("required"));
    }

    #[test]
    fn test_typing_then_blur_clears_error() {
        let values = ValueStore::new(form_values([("name", "")]));
        let errors = ErrorStore::new(
            FieldValidations::builder()
                .field("name")
                .rule(rules::required)
                .build(),
        );
        errors.validate_input_value("name", "");

        values
            .update_input_value(&InputChange::new("name", "John Smith"))
            .unwrap();
        let value = values.value("name");

        assert!(errors.validate_input_value("name", value.as_deref()));
        assert_eq!(errors.first_error("name"), None);
    }

    #[test]
    fn test_blur_clear_removes_injected_error() {
        let errors = ErrorStore::new(
            FieldValidations::builder()
                .field("name")
                .rule(rules::required)
                .build(),
        );
        errors.set_input_errors("name", vec!["Whoops!".to_string()]);
        assert_eq!(errors.first_error("name").as_deref(), Some("Whoops!"));

        errors.clear_input_errors("name");
        assert!(errors.input_errors("name").is_empty());
    }

    #[test]
    fn test_reset_after_typing() {
        let values = ValueStore::new(form_values([("name", "John Smith")]));
        values
            .update_input_value(&InputChange::new("name", "Bob Brown"))
            .unwrap();
        values.reset_input_value("name");
        assert_eq!(values.value("name").as_deref(), Some("John Smith"));
    }
}

// =============================================================================
// Whole form
// =============================================================================

mod form {
    use super::*;

    #[test]
    fn test_validate_then_clear() {
        let values = ValueStore::new(form_values([("name", ""), ("email", "")]));
        let errors = ErrorStore::new(required_name_and_email());

        assert!(!errors.validate_form(&values.values()));
        let snapshot = errors.errors();
        assert_eq!(snapshot["name"], vec!["This field is required."]);
        assert_eq!(snapshot["email"], vec!["This field is required."]);
        assert_eq!(errors.number_of_errors(), 2);

        errors.clear_form_errors();
        assert!(errors.errors().values().all(Vec::is_empty));
        assert_eq!(errors.number_of_errors(), 0);
    }

    #[test]
    fn test_set_then_reset_form_values() {
        let initial = form_values([("name", ""), ("email", "")]);
        let values = ValueStore::new(initial.clone());

        values
            .set_form_values(form_values([("name", "Bob Brown"), ("email", "bob@email.com")]))
            .unwrap();
        assert_eq!(values.value("email").as_deref(), Some("bob@email.com"));

        values.reset_form_values();
        assert_eq!(values.values(), initial);
    }

    #[test]
    fn test_submit_only_when_valid() {
        let values = ValueStore::new(form_values([("name", ""), ("email", "")]));
        let errors = ErrorStore::new(required_name_and_email());
        let submitted = Arc::new(Mutex::new(Vec::<FormValues>::new()));

        let submit = |values: &ValueStore| {
            let current = values.values();
            if errors.validate_form(&current) {
                submitted.lock().unwrap().push(current);
            }
        };

        submit(&values);
        assert!(submitted.lock().unwrap().is_empty());

        values.set_input_value("name", "Ada").unwrap();
        values.set_input_value("email", "ada@example.com").unwrap();
        submit(&values);

        let submitted = submitted.lock().unwrap();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0]["name"], "Ada");
    }

    #[test]
    fn test_observers_follow_both_stores() {
        let values = ValueStore::new(form_values([("name", "")]));
        let errors = ErrorStore::new(
            FieldValidations::builder()
                .field("name")
                .rule(rules::required)
                .build(),
        );
        let renders = Arc::new(Mutex::new(Vec::<String>::new()));

        let sink = Arc::clone(&renders);
        let _values_sub = values.subscribe(move |v| {
            sink.lock().unwrap().push(format!("value={}", v["name"]));
        });
        let sink = Arc::clone(&renders);
        let _errors_sub = errors.subscribe(move |e| {
            sink.lock().unwrap().push(format!("errors={}", e["name"].len()));
        });

        errors.validate_input_value("name", "");
        values.set_input_value("name", "x").unwrap();
        errors.validate_input_value("name", "x");

        assert_eq!(
            *renders.lock().unwrap(),
            vec!["errors=1", "value=x", "errors=0"]
        );
    }
}
