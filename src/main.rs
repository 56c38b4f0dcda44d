use fieldsync::{
    DEFAULT_COMMIT_DELAY, FieldCore, FormField, FormModel, FormUi, InputKind, SelectControl,
    SelectOption, TextConfig,
};
use serde_json::json;

type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
    let delay = DEFAULT_COMMIT_DELAY;

    let model = FormModel::new()
        .with_field(FormField::text(
            FieldCore::new("clientName", None, delay),
            TextConfig::new("Client name").with_placeholder("Acme Inc."),
        ))
        .with_field(FormField::text(
            FieldCore::new("email", None, delay),
            TextConfig::new("Email")
                .with_kind(InputKind::Email)
                .with_placeholder("billing@acme.example"),
        ))
        .with_field(FormField::text(
            FieldCore::new("startDate", None, delay),
            TextConfig::new("Job start date").with_kind(InputKind::Date),
        ))
        .with_field(FormField::select(
            FieldCore::new("status", None, delay),
            SelectControl::new(
                "Status",
                vec![
                    SelectOption::new("lead", "Lead"),
                    SelectOption::new("active", "Active"),
                    SelectOption::new("archived", "Archived"),
                ],
            ),
        ))
        .with_field(FormField::text(
            FieldCore::new("notes", None, delay),
            TextConfig::new("Notes").with_kind(InputKind::Multiline { rows: 4 }),
        ));

    let committed = FormUi::new(model)
        .with_title("New client")
        .with_description("Values commit after a 300 ms pause or when a field loses focus.")
        .with_seed(json!({ "status": "lead" }))
        .run()?;

    println!("{}", serde_json::to_string_pretty(&committed)?);
    Ok(())
}
