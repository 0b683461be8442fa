//! Common test utilities for building form documents and flow graphs.
use formflow::prelude::*;

fn required_radio(id: &str, label: &str, options: Vec<ChoiceOption>) -> Component {
    Component::Radio(ChoiceComponent {
        id: id.to_string(),
        label: Some(label.to_string()),
        options,
        validation: Some(ValidationRules::required()),
        visibility_conditions: vec![],
    })
}

/// Builds the health-check branching form:
///
/// - `symptoms` asks `symptomRadio` (none / fever / cough) and branches:
///   fever and cough lead to `details`, none skips straight to `end`.
/// - `details` asks `durationSelect` and `severityRadio`, both required,
///   then continues to `end`.
/// - `end` is a terminal page with only display text.
#[allow(dead_code)]
pub fn create_health_check_document() -> FormDocument {
    let mut symptoms = Page::new("symptoms", "Symptoms", "/symptoms");
    symptoms.components.push(required_radio(
        "symptomRadio",
        "What is your main symptom?",
        vec![
            ChoiceOption::new("None", "none"),
            ChoiceOption::new("Fever", "fever"),
            ChoiceOption::new("Cough", "cough"),
        ],
    ));
    symptoms.branches = Some(vec![
        Branch::new(Condition::equals("symptomRadio", "fever"), "details"),
        Branch::new(Condition::equals("symptomRadio", "cough"), "details"),
        Branch::new(Condition::equals("symptomRadio", "none"), "end"),
    ]);

    let mut details = Page::new("details", "Details", "/details");
    details.components.push(Component::Select(ChoiceComponent {
        id: "durationSelect".to_string(),
        label: Some("How long have you had it?".to_string()),
        options: vec![
            ChoiceOption::new("Less than a week", "short"),
            ChoiceOption::new("A week or more", "long"),
        ],
        validation: Some(ValidationRules::required()),
        visibility_conditions: vec![],
    }));
    details.components.push(required_radio(
        "severityRadio",
        "How severe is it?",
        vec![
            ChoiceOption::new("Mild", "mild"),
            ChoiceOption::new("Severe", "severe"),
        ],
    ));
    details.next_page = Some("end".to_string());

    let mut end = Page::new("end", "Done", "/done");
    end.components.push(Component::Text(TextComponent {
        id: "thanksText".to_string(),
        content: Some("Thank you for your answers.".to_string()),
    }));
    end.is_end_page = Some(true);

    FormDocument {
        title: "Health Check".to_string(),
        pages: vec![symptoms, details, end],
    }
}

/// A simple linear form: one page of inputs flowing to an end page, with
/// one conditionally visible required field.
#[allow(dead_code)]
pub fn create_linear_document() -> FormDocument {
    let mut intro = Page::new("intro", "About you", "/about");
    intro.components.push(Component::Input(InputComponent {
        id: "fullName".to_string(),
        label: Some("Full name".to_string()),
        placeholder: None,
        input_type: InputKind::Text,
        validation: Some(ValidationRules {
            required: true,
            min_length: Some(1),
            max_length: Some(100),
            ..ValidationRules::default()
        }),
        visibility_conditions: vec![],
    }));
    intro.components.push(Component::Input(InputComponent {
        id: "contactEmail".to_string(),
        label: Some("Email".to_string()),
        placeholder: Some("you@example.com".to_string()),
        input_type: InputKind::Email,
        validation: Some(ValidationRules::required()),
        visibility_conditions: vec![],
    }));
    intro.components.push(Component::Checkbox(CheckboxComponent {
        id: "hasAllergies".to_string(),
        label: Some("Do you have allergies?".to_string()),
        validation: None,
        visibility_conditions: vec![],
    }));
    intro.components.push(Component::Textarea(TextareaComponent {
        id: "allergyDetails".to_string(),
        label: Some("Tell us about them".to_string()),
        placeholder: None,
        validation: Some(ValidationRules::required()),
        visibility_conditions: vec![Condition::equals("hasAllergies", true)],
    }));
    intro.next_page = Some("end".to_string());

    let mut end = Page::new("end", "Done", "/done");
    end.components.push(Component::Button(ButtonComponent {
        id: "submitButton".to_string(),
        label: Some("Submit".to_string()),
    }));
    end.is_end_page = Some(true);

    FormDocument {
        title: "Linear Form".to_string(),
        pages: vec![intro, end],
    }
}

/// Edges describing the health-check flow, as a graph editor would emit
/// them.
#[allow(dead_code)]
pub fn create_health_check_edges() -> Vec<FlowEdge> {
    vec![
        FlowEdge {
            id: "e1".to_string(),
            source: "symptoms".to_string(),
            target: "details".to_string(),
            edge_type: "smoothstep".to_string(),
            label: Some("symptomRadio == fever".to_string()),
        },
        FlowEdge {
            id: "e2".to_string(),
            source: "symptoms".to_string(),
            target: "details".to_string(),
            edge_type: "smoothstep".to_string(),
            label: Some("symptomRadio == cough".to_string()),
        },
        FlowEdge {
            id: "e3".to_string(),
            source: "symptoms".to_string(),
            target: "end".to_string(),
            edge_type: "smoothstep".to_string(),
            label: Some("symptomRadio == none".to_string()),
        },
        FlowEdge {
            id: "e4".to_string(),
            source: "details".to_string(),
            target: "end".to_string(),
            edge_type: "smoothstep".to_string(),
            label: None,
        },
    ]
}
