//! Hardcoded Arabic copy for the page. The layout is right-to-left.

pub const PAGE_TITLE: &str = "سجل الاستلام و التسليم المركبات";
pub const WINDOW_TITLE: &str = "سجل المركبات";

pub const LOADING: &str = "جاري تحميل البيانات...";
pub const LOAD_FAILED: &str = "خطأ في تحميل البيانات";
pub const LAST_UPDATED: &str = "آخر تحديث";

pub const SHOW_FILTERS: &str = "عرض الفلاتر";
pub const FILTERS_ACTIVE: &str = "فلاتر نشطة";
pub const SHOW_ALL: &str = "عرض جميع السجلات";

pub const FILTER_HEADING: &str = "بحث عن طريق";
pub const FILTER_EMPLOYEE_NUMBER: &str = "الرقم الاداري";
pub const FILTER_EMPLOYEE_NUMBER_HINT: &str = "أدخل الرقم الاداري بالضبط...";
pub const FILTER_CAR_NUMBER: &str = "رقم المركبة";
pub const FILTER_CAR_NUMBER_HINT: &str = "أدخل رقم المركبة بالضبط...";
pub const FILTER_DATE: &str = "حسب التاريخ";
pub const SEARCH: &str = "بحث";
pub const CLOSE: &str = "إغلاق";

pub const COLUMN_CAR_NUMBER: &str = "رقم المركبة";
pub const COLUMN_EMPLOYEE_NUMBER: &str = "الرقم الاداري";
pub const COLUMN_EMPLOYEE_NAME: &str = "الاسم";
pub const COLUMN_TAKEN_DATE: &str = "تاريخ الاستلام";
pub const COLUMN_TAKEN_TIME: &str = "وقت الاستلام";
pub const COLUMN_RETURN_DATE: &str = "تاريخ التسليم";
pub const COLUMN_RETURN_TIME: &str = "وقت التسليم";
pub const COLUMN_NOTE: &str = "ملاحظات";

pub const NO_RECORDS: &str = "لا يوجد سجلات";
pub const NEXT_PAGE: &str = "التالي";
pub const PREVIOUS_PAGE: &str = "السابق";

pub const CONNECTION_CHECK: &str = "اختبار الاتصال";
pub const BACK_TO_LOGS: &str = "العودة إلى السجلات";

pub fn page_position(page: usize, total_pages: usize) -> String {
    format!("صفحة {page} من {total_pages}")
}

pub fn filtered_summary(visible: usize, total: usize) -> String {
    format!("يتم عرض {visible} من أصل {total} سجل")
}

pub fn filter_applied(visible: usize, total: usize) -> String {
    format!("تم تطبيق التصفية - {}", filtered_summary(visible, total))
}
