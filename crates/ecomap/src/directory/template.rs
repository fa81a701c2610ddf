use rust_xlsxwriter::{
    Color, DataValidation, Format, FormatAlign, Formula, Workbook, Worksheet, XlsxError,
};

/// Categorical fallbacks used when the live directory has no data yet.
pub const FALLBACK_INDUSTRIES: &[&str] = &[
    "Information Technology",
    "E-commerce",
    "Agriculture",
    "Education",
    "Health",
    "Renewable Energy",
    "FinTech",
    "Logistics",
    "Tourism",
    "Food Industry",
    "Handicrafts",
    "Other",
];

/// The fixed Egyptian governorate list backing the governorate dropdown.
pub const GOVERNORATES: &[&str] = &[
    "Cairo",
    "Giza",
    "Alexandria",
    "Minya",
    "Assiut",
    "Beni Suef",
    "Fayoum",
    "Sohag",
    "Qena",
    "Luxor",
    "Aswan",
    "Red Sea",
    "New Valley",
    "Matrouh",
    "North Sinai",
    "South Sinai",
    "Port Said",
    "Ismailia",
    "Suez",
    "Sharqia",
    "Dakahlia",
    "Damietta",
    "Kafr el-Sheikh",
    "Gharbia",
    "Monufia",
    "Qalyubia",
    "Beheira",
];

const CEO_GENDERS: &[&str] = &["Male", "Female"];
const STARTUP_TYPES: &[&str] = &["Startup", "MSME", "Livelihood"];
const LEGAL_STATUSES: &[&str] = &["Sole Proprietorship", "Partnership", "LLC", "Not Registered"];
const PROFITABILITY_STAGES: &[&str] = &["Profitable", "Breaking Even", "Loss-making", "Pre-revenue"];
const DEDICATED_PLACE: &[&str] = &["Yes", "No"];
const WORKPLACE_TYPES: &[&str] = &["Own", "Rent", "online", "Co-working"];
const OPEN_CLOSED: &[&str] = &["Open", "Closed"];

/// Data-entry columns in their fixed, documented order. Dropdown bindings
/// below are positional against this list; do not reorder it.
const DATA_COLUMNS: &[(&str, f64)] = &[
    ("Startup Name", 25.0),
    ("CEO Name", 20.0),
    ("Phone", 15.0),
    ("Email", 25.0),
    ("Industry", 20.0),
    ("Governerate", 18.0),
    ("Revenue (Total) (Yearly)", 22.0),
    ("profitability", 18.0),
    ("CEO Gender", 15.0),
    ("Description", 40.0),
    ("Startup type", 18.0),
    ("Website/ app links/ social media", 35.0),
    ("Open/Closed", 15.0),
    ("Date of company stabilished", 20.0),
    ("Legal Status", 20.0),
    ("Founding team size", 18.0),
    ("Female founders", 18.0),
    ("male founders", 18.0),
    ("Freelancers", 15.0),
    ("Employees", 15.0),
    ("Do you have a dedicated place", 28.0),
    ("own or rent a workplace", 22.0),
    ("Last Fundind Date", 20.0),
    ("What is the Funding entity name?", 30.0),
    ("Funding raised", 20.0),
    ("How much is your monthly income from the project?", 35.0),
    ("Service Provider", 25.0),
    ("Company logo", 30.0),
];

/// Dropdown-validated rows per column (data rows 2..=1000 in sheet terms).
const LAST_VALIDATED_ROW: u32 = 999;

/// Dynamic option lists sourced from the live directory; empty vectors fall
/// back to the static defaults.
#[derive(Debug, Clone, Default)]
pub struct TemplateOptions {
    pub industries: Vec<String>,
    pub service_providers: Vec<String>,
    pub funding_entities: Vec<String>,
}

impl TemplateOptions {
    fn industries(&self) -> Vec<String> {
        if self.industries.is_empty() {
            FALLBACK_INDUSTRIES.iter().map(|s| s.to_string()).collect()
        } else {
            self.industries.clone()
        }
    }

    fn service_providers(&self) -> Vec<String> {
        if self.service_providers.is_empty() {
            vec!["Athar Accelerator".to_string(), "Other".to_string()]
        } else {
            let mut providers = self.service_providers.clone();
            providers.push("Other".to_string());
            providers
        }
    }
}

/// Literal header row of the data-entry sheet, in column order.
pub fn data_entry_headers() -> Vec<String> {
    DATA_COLUMNS.iter().map(|(header, _)| header.to_string()).collect()
}

/// Header row provisioned for a fresh record-store sheet: the data-entry
/// columns wrapped by the server-managed identifier and timestamp columns.
pub fn default_sheet_headers() -> Vec<String> {
    let mut headers = vec!["ID".to_string()];
    headers.extend(data_entry_headers());
    headers.push("Timestamp".to_string());
    headers
}

/// Build the bulk-upload workbook: a data-entry sheet with native dropdown
/// validation, an Options sheet holding the long reference lists, and an
/// Instructions sheet. Returns the serialized `.xlsx` bytes.
pub fn build_template(options: &TemplateOptions) -> Result<Vec<u8>, XlsxError> {
    let industries = options.industries();
    let service_providers = options.service_providers();

    let mut workbook = Workbook::new();

    let data_sheet = workbook.add_worksheet().set_name("Startup Data")?;
    write_data_sheet(data_sheet, &industries, &service_providers)?;

    let options_sheet = workbook.add_worksheet().set_name("Options")?;
    write_options_sheet(
        options_sheet,
        &industries,
        &service_providers,
        &options.funding_entities,
    )?;

    let instructions_sheet = workbook.add_worksheet().set_name("Instructions")?;
    write_instructions_sheet(instructions_sheet)?;

    workbook.save_to_buffer()
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x4472C4))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

fn write_data_sheet(
    sheet: &mut Worksheet,
    industries: &[String],
    service_providers: &[String],
) -> Result<(), XlsxError> {
    let header = header_format();
    for (col, (title, width)) in DATA_COLUMNS.iter().enumerate() {
        let col = col as u16;
        sheet.write_string_with_format(0, col, *title, &header)?;
        sheet.set_column_width(col, *width)?;
    }
    sheet.set_row_height(0, 25)?;
    sheet.set_freeze_panes(1, 0)?;

    write_example_row(sheet)?;

    // Inline lists for the short enumerations.
    for (col, values) in [
        (7u16, PROFITABILITY_STAGES),
        (8, CEO_GENDERS),
        (10, STARTUP_TYPES),
        (12, OPEN_CLOSED),
        (14, LEGAL_STATUSES),
        (20, DEDICATED_PLACE),
        (21, WORKPLACE_TYPES),
    ] {
        let validation = DataValidation::new().allow_list_strings(values)?;
        sheet.add_data_validation(1, col, LAST_VALIDATED_ROW, col, &validation)?;
    }

    // Long lists reference the Options sheet.
    for (col, option_column, len) in [
        (4u16, 'A', industries.len()),
        (5, 'B', GOVERNORATES.len()),
        (26, 'C', service_providers.len()),
    ] {
        let range = format!("Options!${option_column}$2:${option_column}${}", len + 1);
        let validation = DataValidation::new().allow_list_formula(Formula::new(range));
        sheet.add_data_validation(1, col, LAST_VALIDATED_ROW, col, &validation)?;
    }

    Ok(())
}

fn write_example_row(sheet: &mut Worksheet) -> Result<(), XlsxError> {
    let cells: &[(u16, &str)] = &[
        (0, "Example Startup"),
        (1, "Founder Name"),
        (2, "01000000000"),
        (3, "info@example.com"),
        (4, "Information Technology"),
        (5, "Cairo"),
        (7, "Profitable"),
        (8, "Male"),
        (9, "High-tech software solutions for businesses."),
        (10, "Startup"),
        (11, "https://example.com"),
        (12, "Open"),
        (13, "2021-05-15"),
        (14, "Not Registered"),
        (20, "Yes"),
        (21, "Rent"),
        (22, "2023-10-10"),
        (23, "VC Name"),
        (24, "250000"),
        (25, "45000"),
        (26, "Athar Accelerator"),
        (27, "https://example.com/logo.png"),
    ];
    for (col, value) in cells {
        sheet.write_string(1, *col, *value)?;
    }
    for (col, value) in [(6u16, 500_000.0), (15, 3.0), (16, 1.0), (17, 2.0), (18, 2.0), (19, 5.0)] {
        sheet.write_number(1, col, value)?;
    }
    Ok(())
}

fn write_options_sheet(
    sheet: &mut Worksheet,
    industries: &[String],
    service_providers: &[String],
    funding_entities: &[String],
) -> Result<(), XlsxError> {
    let header = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xE7E6E6));

    let governorates: Vec<String> = GOVERNORATES.iter().map(|s| s.to_string()).collect();
    let columns: &[(&str, &[String], f64)] = &[
        ("Industry", industries, 25.0),
        ("Governorate", &governorates, 20.0),
        ("Service Provider", service_providers, 25.0),
        ("Funding Entity", funding_entities, 25.0),
    ];

    for (col, (title, values, width)) in columns.iter().enumerate() {
        let col = col as u16;
        sheet.write_string_with_format(0, col, *title, &header)?;
        sheet.set_column_width(col, *width)?;
        for (row, value) in values.iter().enumerate() {
            sheet.write_string(row as u32 + 1, col, value.as_str())?;
        }
    }

    Ok(())
}

fn write_instructions_sheet(sheet: &mut Worksheet) -> Result<(), XlsxError> {
    let header = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x70AD47));

    sheet.write_string_with_format(0, 0, "Instructions", &header)?;
    sheet.set_column_width(0, 80.0)?;

    let instructions = [
        "Welcome to the Startup Data Template.",
        "",
        "How to use this template:",
        "1. Fill in your startup data in the \"Startup Data\" sheet.",
        "2. Click on cells with dropdown arrows to select from predefined options.",
        "3. The example row is automatically skipped during upload.",
        "4. Required fields are marked with * in the portal.",
        "",
        "Columns with native dropdown lists:",
        "   - CEO Gender: Male or Female",
        "   - Startup Type: Startup, MSME, or Livelihood",
        "   - Industry: select from available industries",
        "   - Governorate: select the Egyptian governorate",
        "   - Legal Status: registration type",
        "   - Profitability: current financial stage",
        "   - Dedicated Place: Yes or No",
        "   - Workplace Type: Own, Rent, online, or Co-working",
        "   - Open/Closed: current operational status",
        "   - Service Provider: select from available providers",
        "",
        "Tips:",
        "   - Dates should be in YYYY-MM-DD format (e.g., 2021-05-15).",
        "   - Phone numbers should start with 01.",
        "   - Email must be a valid address.",
        "   - Website must be a valid URL or social media link.",
        "   - If no funding, write \"None\" in the Funding raised field.",
        "",
        "The \"Options\" sheet contains the reference data behind the dropdowns.",
        "",
        "This template works in both Microsoft Excel and Google Sheets.",
    ];
    for (index, line) in instructions.iter().enumerate() {
        sheet.write_string(index as u32 + 1, 0, *line)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sheet_headers_wrap_the_data_columns() {
        let headers = default_sheet_headers();
        assert_eq!(headers.first().map(String::as_str), Some("ID"));
        assert_eq!(headers.last().map(String::as_str), Some("Timestamp"));
        assert_eq!(headers.len(), DATA_COLUMNS.len() + 2);
        assert_eq!(headers[1], "Startup Name");
    }

    #[test]
    fn data_columns_keep_their_documented_positions() {
        let headers = data_entry_headers();
        // Dropdown bindings are positional; these anchors must not move.
        assert_eq!(headers[4], "Industry");
        assert_eq!(headers[5], "Governerate");
        assert_eq!(headers[8], "CEO Gender");
        assert_eq!(headers[26], "Service Provider");
        assert_eq!(headers.len(), 28);
    }

    #[test]
    fn template_builds_with_defaults() {
        let bytes = build_template(&TemplateOptions::default()).expect("template builds");
        // XLSX containers are zip files.
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn template_builds_with_live_option_lists() {
        let options = TemplateOptions {
            industries: vec!["Robotics".to_string()],
            service_providers: vec!["Delta Hub".to_string()],
            funding_entities: vec!["Angel Fund".to_string()],
        };
        assert!(build_template(&options).is_ok());
    }
}
