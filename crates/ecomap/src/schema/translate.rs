use std::collections::HashMap;
use std::sync::OnceLock;

/// Arabic category labels mapped to their English display labels. This is a
/// value-translation table, deliberately separate from the header alias
/// table: it renames data, not columns.
const CATEGORY_LABELS: &[(&str, &str)] = &[
    // Industries
    ("التكنولوجيا", "Technology"),
    ("البيئة واعادة التدوير", "Environment & Recycling"),
    ("الحرف اليدوية", "Handicrafts"),
    ("الصناعات الغذائية", "Food Industry"),
    ("الخدمات اللوجستية", "Logistics"),
    ("التعليم", "Education"),
    ("الصحة", "Health"),
    ("الزراعة", "Agriculture"),
    ("السياحة", "Tourism"),
    ("التجارة الالكترونية", "E-commerce"),
    ("أخرى", "Other"),
    ("صناعة المنسوجات والملابس", "Textiles & Clothing"),
    ("صناعة الأثاث", "Furniture"),
    ("صناعة الجلود", "Leather"),
    ("الصناعات الكيماوية", "Chemical Industries"),
    ("صناعة الورق", "Paper Industry"),
    ("الصناعات الهندسية", "Engineering Industries"),
    ("مواد البناء", "Construction Materials"),
    ("الطاقة المتجددة", "Renewable Energy"),
    ("إدارة المخلفات", "Waste Management"),
    ("خدمات مالية", "Financial Services"),
    ("خدمات طبية", "Medical Services"),
    ("خدمات تعليمية", "Educational Services"),
    ("خدمات استشارية", "Consulting Services"),
    ("تسويق ودعاية", "Marketing & Advertising"),
    ("نقل وشحن", "Transportation & Shipping"),
    ("سياحة وفنادق", "Tourism & Hospitality"),
    ("مطاعم وكافيهات", "Restaurants & Cafes"),
    ("بيع بالتجزئة", "Retail"),
    ("تجارة جملة", "Wholesale"),
    ("فنون وثقافة", "Arts & Culture"),
    ("إعلام ونشر", "Media & Publishing"),
    ("رياضة وترفيه", "Sports & Entertainment"),
    ("تجميل وعناية شخصية", "Beauty & Personal Care"),
    ("عقارات", "Real Estate"),
    ("أمن وحراسة", "Security Services"),
    ("صيانة وإصلاح", "Maintenance & Repair"),
    ("خدمات منزلية", "Home Services"),
    ("تكنولوجيا المعلومات", "Information Technology"),
    ("برمجة وتطوير", "Software Development"),
    ("تصميم جرافيك", "Graphic Design"),
    ("تسويق رقمي", "Digital Marketing"),
    ("صناعة المحتوى", "Content Creation"),
    ("تعليم إلكتروني", "E-learning"),
    ("صحة رقمية", "Digital Health"),
    ("تكنولوجيا زراعية", "AgriTech"),
    ("تكنولوجيا مالية", "FinTech"),
    ("ذكاء اصطناعي", "Artificial Intelligence"),
    ("إنترنت الأشياء", "IoT"),
    ("روبوتات", "Robotics"),
    ("طباعة ثلاثية الأبعاد", "3D Printing"),
    ("بلوكتشين", "Blockchain"),
    // Governorates
    ("القاهرة", "Cairo"),
    ("الجيزة", "Giza"),
    ("الأسكندرية", "Alexandria"),
    ("المنيا", "Minya"),
    ("أسيوط", "Assiut"),
    ("بني سويف", "Beni Suef"),
    ("الفيوم", "Fayoum"),
    ("سوهاج", "Sohag"),
    ("قنا", "Qena"),
    ("الأقصر", "Luxor"),
    ("أسوان", "Aswan"),
    ("البحر الأحمر", "Red Sea"),
    ("الوادى الجديد", "New Valley"),
    ("مطروح", "Matrouh"),
    ("شمال سيناء", "North Sinai"),
    ("جنوب سيناء", "South Sinai"),
    ("بورسعيد", "Port Said"),
    ("الإسماعيلية", "Ismailia"),
    ("السويس", "Suez"),
    ("الشرقية", "Sharqia"),
    ("الدقهلية", "Dakahlia"),
    ("دمياط", "Damietta"),
    ("كفر الشيخ", "Kafr el-Sheikh"),
    ("الغربية", "Gharbia"),
    ("المنوفية", "Monufia"),
    ("القليوبية", "Qalyubia"),
    ("البحيرة", "Beheira"),
    // Gender
    ("ذكر", "Male"),
    ("أنثى", "Female"),
    // Founder status
    ("طالب", "Student"),
    ("خريج", "Graduate"),
    // Stages
    ("فكرة", "Idea"),
    ("نموذج أولي", "MVP"),
    ("مرحلة النمو", "Growth"),
    ("شركة قائمة", "Scale-up"),
    // Funding
    ("تمويل ذاتي", "Self-funded"),
    ("تمويل خارجي", "External Funding"),
    // Legal status
    ("مسجل", "Registered"),
    ("غير مسجل", "Not Registered"),
];

static LABEL_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

/// Translate a categorical label for display. Unrecognized labels pass
/// through trimmed rather than erroring, so schema drift degrades softly.
pub fn translate_label(value: &str) -> String {
    let trimmed = value.trim();
    label_map()
        .get(trimmed)
        .map(|label| (*label).to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

fn label_map() -> &'static HashMap<&'static str, &'static str> {
    LABEL_MAP.get_or_init(|| CATEGORY_LABELS.iter().copied().collect())
}
