//! The built-in field schema, used whenever no config document has been
//! stored yet. Admin settings replace it wholesale; nothing here migrates
//! existing answers.

use crate::models::{ChecklistConfig, FieldConfig, GroupField, GroupKind, LeafField, LeafKind};

fn field(id: &str, label: &str, kind: LeafKind) -> LeafField {
    LeafField {
        id: id.into(),
        label: label.into(),
        kind,
        optional: false,
        options: vec![],
    }
}

fn optional(mut field: LeafField) -> LeafField {
    field.optional = true;
    field
}

fn select(id: &str, label: &str, options: &[&str]) -> LeafField {
    LeafField {
        options: options.iter().map(|s| (*s).to_string()).collect(),
        ..field(id, label, LeafKind::Select)
    }
}

fn leaf(inner: LeafField) -> FieldConfig {
    FieldConfig::Leaf(inner)
}

fn group(id: &str, label: &str, fields: Vec<LeafField>) -> FieldConfig {
    FieldConfig::Group(GroupField {
        id: id.into(),
        label: label.into(),
        kind: GroupKind::Group,
        fields,
    })
}

/// The first-run schema for both checklists.
pub fn default_config() -> ChecklistConfig {
    ChecklistConfig {
        version: "v1".into(),
        sales: vec![
            leaf(field("contract_signed", "Contract signed", LeafKind::Checkbox)),
            leaf(field("brand_assets", "Brand asset folder", LeafKind::Url)),
            leaf(optional(field("product_catalog", "Product catalog", LeafKind::Url))),
            leaf(field("integrations", "Requested integrations", LeafKind::MultiInput)),
            leaf(select(
                "launch_window",
                "Target launch window",
                &["Q1", "Q2", "Q3", "Q4"],
            )),
            group(
                "billing",
                "Billing details",
                vec![
                    select(
                        "provider",
                        "Payment provider",
                        &["Stripe", "Shopify Payments", "Other"],
                    ),
                    field("account_email", "Billing account email", LeafKind::Text),
                    optional(field("notes", "Billing notes", LeafKind::Textarea)),
                ],
            ),
            group(
                "contact",
                "Point of contact",
                vec![
                    field("name", "Contact name", LeafKind::Text),
                    field("email", "Contact email", LeafKind::Text),
                    optional(field("phone", "Contact phone", LeafKind::Text)),
                ],
            ),
        ],
        launch: vec![
            leaf(field("integrations", "Integrations to build", LeafKind::MultiInput)),
            leaf(field("feature_builds", "Feature builds", LeafKind::MultiInput)),
            leaf(optional(field(
                "design_revisions",
                "Design revisions",
                LeafKind::MultiInput,
            ))),
            leaf(field("staging_url", "Staging URL", LeafKind::Url)),
            leaf(field("qa_signoff", "QA sign-off", LeafKind::Checkbox)),
            leaf(field("go_live_date", "Go-live date", LeafKind::Text)),
            group(
                "deliverables",
                "Deliverables",
                vec![
                    field("builds", "Build packages", LeafKind::MultiInput),
                    optional(field("release_notes", "Release notes", LeafKind::Textarea)),
                ],
            ),
            leaf(optional(field(
                "training_complete",
                "Merchant training complete",
                LeafKind::Checkbox,
            ))),
        ],
    }
}
