use crate::api::models::Account;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};
use crossterm::terminal;

pub struct TableDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDisplay {
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }

    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _)) => Some((cols as usize).clamp(40, 200)),
            Err(_) => Some(80),
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn bold_header(&self, text: &str, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).add_attribute(Attribute::Bold).fg(color)
        } else {
            Cell::new(text).add_attribute(Attribute::Bold)
        }
    }

    fn new_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        let width = self
            .max_width
            .map(|w| if w > 20 { w - 6 } else { w.max(40) })
            .unwrap_or(80);
        table.set_width(width as u16);
        table
    }

    /// One row per account, in the order given.
    pub fn render_account_list(&self, accounts: &[Account]) -> String {
        if accounts.is_empty() {
            return "No accounts found.".to_string();
        }

        let mut table = self.new_table();
        let headers = ["ID", "Version", "Country", "Currency", "Bank ID", "Name"];
        table.set_header(
            headers
                .iter()
                .map(|h| self.bold_header(h, Color::Cyan))
                .collect::<Vec<_>>(),
        );

        for account in accounts {
            let attributes = &account.attributes;
            table.add_row(vec![
                Cell::new(&account.id),
                Cell::new(account.version),
                Cell::new(&attributes.country),
                Cell::new(&attributes.base_currency),
                Cell::new(&attributes.bank_id),
                Cell::new(display_name(account)),
            ]);
        }

        format!("{}\n{} account(s)", table, accounts.len())
    }

    /// Field/value view of a single account.
    pub fn render_account_detail(&self, account: &Account) -> String {
        let mut table = self.new_table();
        table.set_header(vec![
            self.bold_header("Field", Color::Green),
            self.bold_header("Value", Color::Green),
        ]);

        let attributes = &account.attributes;
        let timestamp = |value: &Option<chrono::DateTime<chrono::Utc>>| {
            value.map(|t| t.to_rfc3339()).unwrap_or_default()
        };
        let rows: Vec<(&str, String)> = vec![
            ("id", account.id.clone()),
            ("organisation_id", account.organisation_id.clone()),
            ("version", account.version.to_string()),
            ("created_on", timestamp(&account.created_on)),
            ("modified_on", timestamp(&account.modified_on)),
            ("country", attributes.country.clone()),
            ("base_currency", attributes.base_currency.clone()),
            ("bank_id", attributes.bank_id.clone()),
            ("bank_id_code", attributes.bank_id_code.clone()),
            ("account_number", attributes.account_number.clone()),
            ("bic", attributes.bic.clone()),
            ("iban", attributes.iban.clone()),
            ("customer_id", attributes.customer_id.clone()),
            ("title", attributes.title.clone()),
            ("first_name", attributes.first_name.clone()),
            ("bank_account_name", attributes.bank_account_name.clone()),
            (
                "alternative_bank_account_names",
                attributes.alternative_bank_account_names.join(", "),
            ),
            (
                "account_classification",
                attributes.account_classification.clone(),
            ),
            ("joint_account", attributes.joint_account.to_string()),
            (
                "account_matching_opt_out",
                attributes.account_matching_opt_out.to_string(),
            ),
            (
                "secondary_identification",
                attributes.secondary_identification.clone(),
            ),
        ];

        for (field, value) in rows {
            table.add_row(vec![Cell::new(field), Cell::new(value)]);
        }

        table.to_string()
    }
}

fn display_name(account: &Account) -> String {
    let attributes = &account.attributes;
    if !attributes.bank_account_name.is_empty() {
        return attributes.bank_account_name.clone();
    }
    [attributes.title.as_str(), attributes.first_name.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
