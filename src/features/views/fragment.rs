//! Typed fragments. Each [`FormView`] is described as an ordered list of
//! [`Node`]s; the Leptos renderer walks the list and the submitter is armed
//! from its field nodes. Server-supplied text only ever lands in text nodes.

use super::view::{FormView, ViewEvent};
use crate::features::{
    auth::context::CsrfToken,
    forms::{Field, FieldKind, ValidatedForm},
};

/// Pre-filled body of the access request description.
pub const DESCRIPTION_TEMPLATE: &str = "Name: \nContact Number: \nQuery information: \n";

const DETAILS_NOTE: &str = "Enter your details then we will get back to you";
const FOLLOW_UP_NOTE: &str = "We will get back to you as soon as possible.";
const BACK_TO_LOGIN: &str = "Go back to login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Categories accepted by ticket creation; the empty value is the prompt.
pub const TICKET_TYPES: [ChoiceOption; 3] = [
    ChoiceOption {
        value: "",
        label: "Choose category",
    },
    ChoiceOption {
        value: "incident",
        label: "Report an issue",
    },
    ChoiceOption {
        value: "request",
        label: "Request access",
    },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Widget {
    Input,
    Select(Vec<ChoiceOption>),
    TextArea,
}

/// One validated input of a fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub widget: Widget,
    pub placeholder: &'static str,
    /// Shown next to the field while it is marked invalid.
    pub hint: &'static str,
    /// Font Awesome icon class.
    pub icon: Option<&'static str>,
    pub initial: String,
}

impl FieldSpec {
    fn input(
        name: &'static str,
        kind: FieldKind,
        placeholder: &'static str,
        hint: &'static str,
        icon: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            widget: Widget::Input,
            placeholder,
            hint,
            icon: Some(icon),
            initial: String::new(),
        }
    }

    pub fn to_field(&self) -> Field {
        Field::new(self.name, self.kind).with_value(self.initial.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Hidden anti-forgery input.
    Token(CsrfToken),
    Title(String),
    Note(String),
    /// Confirmation text from the server.
    Success(String),
    Field(FieldSpec),
    /// Where submission errors are shown, right above the submit control.
    ErrorSlot,
    Submit(String),
    Link {
        lead: Option<String>,
        label: String,
        event: ViewEvent,
    },
}

impl Node {
    fn title(text: &str) -> Self {
        Node::Title(text.to_string())
    }

    fn note(text: &str) -> Self {
        Node::Note(text.to_string())
    }

    fn submit(label: &str) -> Self {
        Node::Submit(label.to_string())
    }

    fn link(lead: Option<&str>, label: &str, event: ViewEvent) -> Self {
        Node::Link {
            lead: lead.map(str::to_string),
            label: label.to_string(),
            event,
        }
    }

    fn back_to_login() -> Self {
        Self::link(None, BACK_TO_LOGIN, ViewEvent::BackToLogin)
    }

    fn text(&self) -> Option<&str> {
        match self {
            Node::Title(text) | Node::Note(text) | Node::Success(text) | Node::Submit(text) => {
                Some(text.as_str())
            }
            Node::Link { label, .. } => Some(label.as_str()),
            Node::Token(_) | Node::Field(_) | Node::ErrorSlot => None,
        }
    }
}

/// The node tree for one view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    view: FormView,
    nodes: Vec<Node>,
}

impl Fragment {
    pub fn build(view: &FormView, token: &CsrfToken) -> Self {
        let mut nodes = vec![Node::Token(token.clone())];
        nodes.extend(match view {
            FormView::Login => login_nodes(),
            FormView::PasswordReset => password_reset_nodes(),
            FormView::AccessRequest => access_request_nodes(),
            FormView::TicketResult(confirmation) => vec![
                Node::title(&confirmation.headline),
                Node::Success(confirmation.detail.clone()),
                Node::note(FOLLOW_UP_NOTE),
                Node::back_to_login(),
            ],
        });

        Self {
            view: view.clone(),
            nodes,
        }
    }

    pub fn view(&self) -> &FormView {
        &self.view
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Field(spec) => Some(spec),
            _ => None,
        })
    }

    pub fn events(&self) -> impl Iterator<Item = ViewEvent> + '_ {
        self.nodes.iter().filter_map(|node| match node {
            Node::Link { event, .. } => Some(*event),
            _ => None,
        })
    }

    /// `true` if any text node contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.nodes
            .iter()
            .filter_map(Node::text)
            .any(|text| text.contains(needle))
    }

    /// Arms a submitter over the fragment's fields; `None` without a submit control.
    pub fn arm(&self) -> Option<ValidatedForm> {
        self.nodes
            .iter()
            .any(|node| matches!(node, Node::Submit(_)))
            .then(|| ValidatedForm::arm(self.fields().map(FieldSpec::to_field)))
    }
}

fn login_nodes() -> Vec<Node> {
    vec![
        Node::title("Login"),
        Node::Field(FieldSpec::input(
            "username",
            FieldKind::Text,
            "Username",
            "Valid username is required",
            "fa-user",
        )),
        Node::Field(FieldSpec::input(
            "password",
            FieldKind::Password,
            "Password",
            "Password is required",
            "fa-lock",
        )),
        Node::ErrorSlot,
        Node::submit("Login"),
        Node::link(Some("Forgot"), "Password?", ViewEvent::ForgotPassword),
        Node::link(
            None,
            "Request access/ report an issue",
            ViewEvent::RequestAccess,
        ),
    ]
}

fn password_reset_nodes() -> Vec<Node> {
    vec![
        Node::title("Forgot password"),
        Node::note(DETAILS_NOTE),
        Node::Field(FieldSpec::input(
            "username",
            FieldKind::Text,
            "Username",
            "Valid username is required",
            "fa-user",
        )),
        Node::Field(FieldSpec::input(
            "email",
            FieldKind::Email,
            "Email",
            "Valid email is required: ex@abc.xyz",
            "fa-envelope",
        )),
        Node::ErrorSlot,
        Node::submit("Send"),
        Node::back_to_login(),
    ]
}

fn access_request_nodes() -> Vec<Node> {
    vec![
        Node::note(DETAILS_NOTE),
        Node::Field(FieldSpec {
            name: "ticket_type",
            kind: FieldKind::Text,
            widget: Widget::Select(TICKET_TYPES.to_vec()),
            placeholder: "",
            hint: "Choose a category",
            icon: None,
            initial: String::new(),
        }),
        Node::Field(FieldSpec {
            name: "description",
            kind: FieldKind::Text,
            widget: Widget::TextArea,
            placeholder: "",
            hint: "Tell us how we can help",
            icon: None,
            initial: DESCRIPTION_TEMPLATE.to_string(),
        }),
        Node::Field(FieldSpec::input(
            "email",
            FieldKind::Email,
            "Email",
            "Valid email is required: ex@abc.xyz",
            "fa-envelope",
        )),
        Node::ErrorSlot,
        Node::submit("Send"),
        Node::back_to_login(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::views::view::Confirmation;

    fn token() -> CsrfToken {
        CsrfToken::new("tok")
    }

    fn field_names(fragment: &Fragment) -> Vec<&'static str> {
        fragment.fields().map(|spec| spec.name).collect()
    }

    #[test]
    fn every_fragment_embeds_the_token_first() {
        let views = [
            FormView::Login,
            FormView::PasswordReset,
            FormView::AccessRequest,
            FormView::TicketResult(Confirmation::ticket_logged("INC-1")),
        ];
        for view in views {
            let fragment = Fragment::build(&view, &token());
            assert_eq!(fragment.nodes().first(), Some(&Node::Token(token())));
        }
    }

    #[test]
    fn login_fragment_layout() {
        let fragment = Fragment::build(&FormView::Login, &token());
        assert_eq!(field_names(&fragment), vec!["username", "password"]);
        assert_eq!(
            fragment.events().collect::<Vec<_>>(),
            vec![ViewEvent::ForgotPassword, ViewEvent::RequestAccess]
        );
        assert!(fragment.contains_text("Login"));
    }

    #[test]
    fn error_slot_sits_right_above_submit() {
        for view in [FormView::Login, FormView::PasswordReset, FormView::AccessRequest] {
            let fragment = Fragment::build(&view, &token());
            let slot = fragment
                .nodes()
                .iter()
                .position(|node| *node == Node::ErrorSlot)
                .unwrap();
            assert!(matches!(fragment.nodes()[slot + 1], Node::Submit(_)));
        }
    }

    #[test]
    fn access_request_prefills_description() {
        let fragment = Fragment::build(&FormView::AccessRequest, &token());
        assert_eq!(
            field_names(&fragment),
            vec!["ticket_type", "description", "email"]
        );

        let form = fragment.arm().unwrap();
        assert_eq!(form.value("description"), Some(DESCRIPTION_TEMPLATE));
        assert_eq!(form.value("ticket_type"), Some(""));
    }

    #[test]
    fn ticket_result_has_no_form_and_only_leads_back() {
        let view = FormView::TicketResult(Confirmation::reset_requested("Check your inbox"));
        let fragment = Fragment::build(&view, &token());

        assert!(fragment.arm().is_none());
        assert!(fragment.contains_text("Check your inbox"));
        assert!(fragment.contains_text("Request Successful!"));
        assert_eq!(
            fragment.events().collect::<Vec<_>>(),
            vec![ViewEvent::BackToLogin]
        );
    }

    #[test]
    fn server_text_stays_in_text_nodes() {
        let view = FormView::TicketResult(Confirmation::reset_requested(
            "<img src=x onerror=alert(1)>",
        ));
        let fragment = Fragment::build(&view, &token());
        assert!(
            fragment
                .nodes()
                .contains(&Node::Success("<img src=x onerror=alert(1)>".to_string()))
        );
        assert_eq!(fragment.fields().count(), 0);
    }
}
