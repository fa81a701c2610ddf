use super::normalizer::normalize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Canonical field names used throughout the crate. Raw spreadsheet headers
/// are resolved onto these via the alias table below.
pub(crate) const PHONE: &str = "phone";

/// Destination headers that always resolve to the record identifier.
pub(crate) const ID_SENTINEL: &str = "id";

/// Destination headers that always resolve to the server-set timestamp.
/// The last entry is the long-form header some sheets carry.
pub(crate) const TIMESTAMP_SENTINELS: &[&str] =
    &["timestamp", "last update", "last updating date for data"];

/// Historically accumulated header variants per canonical field, bilingual.
/// Order matters on the read path: earlier aliases win when several are
/// present in one row.
const FIELD_ALIASES: &[(&str, &[&str])] = &[
    ("id", &["ID", "id"]),
    (
        "name",
        &[
            "Startup Name",
            "اسم الشركة",
            "أسم الشركة",
            "Name",
            "Company Name",
            "Business Name",
            "الشركة",
            "startupName",
        ],
    ),
    ("ceoName", &["CEO Name", "اسم المؤسس", "Founder"]),
    ("ceoGender", &["CEO Gender", "النوع", "Gender"]),
    (
        "industry",
        &[
            "Industry",
            "قطاع المشروع الصناعة",
            "Sector",
            "قطاع المشروع",
            "الصناعة",
        ],
    ),
    ("governorate", &["Governerate", "المحافظة", "Governorate"]),
    ("phone", &["Phone", "الهاتف", "Mobile"]),
    ("email", &["Email", "البريد الالكتروني"]),
    (
        "employees",
        &[
            "Nu. of employees",
            "عدد الموظفين كلهم بدون المؤسسين",
            "Employees",
            "Staff",
            "عدد الموظفين",
            "employees",
        ],
    ),
    (
        "revenue",
        &[
            "Revenue (Total) (Yearly)",
            "الايرادات سنوي",
            "Revenue",
            "Total Revenue",
            "الايرادات",
            "revenue",
        ],
    ),
    (
        "profitability",
        &[
            "profitability",
            "مرحلة المشروع",
            "Stage",
            "Current Stage",
            "الربحية",
        ],
    ),
    (
        "description",
        &["Description", "الوصف", "وصف مختصر للشركة", "Brief"],
    ),
    ("startupType", &["Startup type", "نوع الشركة", "Startup Type"]),
    (
        "website",
        &[
            "Website/ app links/ social media",
            "التطبيق /رابط الموقع",
            "Website",
        ],
    ),
    (
        "openClosed",
        &["Open/Closed", "Operational status", "Status", "حالة العمل"],
    ),
    (
        "foundingDate",
        &[
            "Date of company stabilished",
            "تاريخ التأسيس",
            "Date of establishment",
            "Founding Date",
        ],
    ),
    (
        "legalStatus",
        &["Legal Status", "هل المشروع مسجل", "الوضع القانوني"],
    ),
    (
        "teamSize",
        &[
            "Founding team size",
            "عدد المؤسسين",
            "Team Size",
            "عدد فريق التأسيس",
        ],
    ),
    (
        "femaleFounders",
        &[
            "Female founders",
            "عدد المؤسسات الإناث",
            "Female Founders",
            "عدد الإناث المؤسسات",
        ],
    ),
    (
        "maleFounders",
        &[
            "male founders",
            "عدد المؤسسين الذكور",
            "Male Founders",
            "عدد الذكور المؤسسين",
        ],
    ),
    (
        "freelancersCount",
        &[
            "Number of freelancers",
            "عدد المتدرّبين/الفريلانسرز",
            "Freelancers",
            "عدد الفريلانسرز",
        ],
    ),
    (
        "hasDedicatedPlace",
        &[
            "Do you have a dedicated place",
            "مكان مخصص",
            "Has Dedicated Place",
        ],
    ),
    (
        "workplaceType",
        &["own or rent a workplace", "نوع مكان العمل", "Workplace Type"],
    ),
    (
        "fundingEntity",
        &[
            "What is the Funding entity?",
            "جهة التمويل",
            "What is the Funding entity name?",
            "ما هي جهة التمويل؟",
        ],
    ),
    (
        "fundingRaised",
        &[
            "Funding raised",
            "قيمة تمويل",
            "Total Funding",
            "Funding Raised",
            "تمويل",
        ],
    ),
    (
        "monthlyIncome",
        &[
            "How much is your monthly income from the project?",
            "الدخل الشهري",
            "Monthly Income",
        ],
    ),
    (
        "serviceProvider",
        &["Service Provider", "Incubator", "مقدم الخدمة"],
    ),
    (
        "lastFundingDate",
        &["Last Funding Date", "تاريخ آخر تمويل", "Last Fundind Date"],
    ),
    (
        "logo",
        &["Company Logo", "شعار الشركة", "Company logo", "Logo"],
    ),
    (
        "lastUpdate",
        &["Timestamp", "Last Update", "Last updating Date for Data"],
    ),
];

static INVERTED_ALIASES: OnceLock<HashMap<String, &'static str>> = OnceLock::new();

/// Resolve a normalized header onto its canonical field, if any alias
/// matches. Last writer wins on collisions; the shipped table has none.
pub(crate) fn canonical_key_for(normalized_header: &str) -> Option<&'static str> {
    inverted_aliases().get(normalized_header).copied()
}

fn inverted_aliases() -> &'static HashMap<String, &'static str> {
    INVERTED_ALIASES.get_or_init(|| {
        let mut map = HashMap::new();
        for (key, aliases) in FIELD_ALIASES {
            for alias in *aliases {
                map.insert(normalize(alias), *key);
            }
        }
        map
    })
}

/// Ordered alias list for one canonical field (read path).
pub(crate) fn aliases_for(key: &str) -> &'static [&'static str] {
    FIELD_ALIASES
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, aliases)| *aliases)
        .unwrap_or(&[])
}
