//! Выбор категории/типа на странице списка товаров и текст заголовка для него.
//!
//! Выбор приходит либо из строки запроса (`?category=PHONE_CASE&type=HARD`),
//! либо из `data-category` / `data-type` ссылки навигации. Коды не
//! валидируются: неизвестный код даёт пустой сегмент в заголовке.

use crate::enums::{category_display, type_display};
use serde::Serialize;
use std::borrow::Cow;

/// Пара кодов в том виде, в каком она пришла со страницы
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategorySelection {
    pub category: String,
    pub product_type: String,
}

#[derive(Serialize)]
struct ProductListQueryRef<'a> {
    category: &'a str,
    #[serde(rename = "type")]
    product_type: &'a str,
}

impl CategorySelection {
    pub fn new(category: impl Into<String>, product_type: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            product_type: product_type.into(),
        }
    }

    /// Выбор из `location.search`.
    ///
    /// `Some` только если заданы оба параметра и оба непустые. Из повторов
    /// берётся первое значение, остальные параметры не разбираются.
    pub fn from_query(search: &str) -> Option<Self> {
        let search = search.strip_prefix('?').unwrap_or(search);
        match (query_value(search, "category"), query_value(search, "type")) {
            (Some(category), Some(product_type))
                if !category.is_empty() && !product_type.is_empty() =>
            {
                Some(Self::new(category, product_type))
            }
            _ => None,
        }
    }

    /// Выбор из атрибутов ссылки; отсутствующий атрибут читается как пустая строка
    pub fn from_attributes(category: Option<String>, product_type: Option<String>) -> Self {
        Self {
            category: category.unwrap_or_default(),
            product_type: product_type.unwrap_or_default(),
        }
    }

    /// Текст заголовка `"<категория> (<тип>)"`
    pub fn label(&self) -> String {
        format_label(&self.category, &self.product_type)
    }

    /// Обратное к `from_query`: `category=<код>&type=<код>`
    pub fn to_query(&self) -> String {
        serde_qs::to_string(&ProductListQueryRef {
            category: &self.category,
            product_type: &self.product_type,
        })
        .unwrap_or_default()
    }
}

/// Первое значение параметра `key` в `application/x-www-form-urlencoded` строке
fn query_value(search: &str, key: &str) -> Option<String> {
    search.split('&').find_map(|pair| {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        (decode_component(name) == key).then(|| decode_component(value).into_owned())
    })
}

/// `+` как пробел, битые последовательности заменяются на U+FFFD
fn decode_component(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['+', '%']) {
        return Cow::Borrowed(raw);
    }
    let raw = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(raw.as_bytes());
    Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
}

/// Формирует текст заголовка по кодам категории и типа.
///
/// ```
/// use contracts::shared::category_selection::format_label;
///
/// assert_eq!(format_label("PHONE_CASE", "HARD"), "폰 케이스 (하드)");
/// assert_eq!(format_label("UNKNOWN", "JELLY"), " (젤리)");
/// ```
pub fn format_label(main_category: &str, sub_category: &str) -> String {
    format!(
        "{} ({})",
        category_display(main_category),
        type_display(sub_category)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{ProductCategory, ProductType};

    #[test]
    fn test_label_for_every_known_pair() {
        for category in ProductCategory::all() {
            for product_type in ProductType::all() {
                let selection = CategorySelection::new(category.code(), product_type.code());
                assert_eq!(
                    selection.label(),
                    format!("{} ({})", category.display_name(), product_type.display_name())
                );
            }
        }
    }

    #[test]
    fn test_label_examples() {
        assert_eq!(format_label("PHONE_CASE", "HARD"), "폰 케이스 (하드)");
        assert_eq!(format_label("AIRPODS", "BUDS"), "에어팟/버즈 (버즈)");
    }

    #[test]
    fn test_unknown_segments_are_blank() {
        assert_eq!(format_label("UNKNOWN", "JELLY"), " (젤리)");
        assert_eq!(format_label("TOK", "UNKNOWN"), "톡 ()");
        assert_eq!(format_label("", ""), " ()");
    }

    #[test]
    fn test_from_query() {
        let selection = CategorySelection::from_query("?category=PHONE_CASE&type=HARD").unwrap();
        assert_eq!(selection, CategorySelection::new("PHONE_CASE", "HARD"));
        assert_eq!(selection.label(), "폰 케이스 (하드)");

        let selection = CategorySelection::from_query("category=UNKNOWN&type=JELLY").unwrap();
        assert_eq!(selection.label(), " (젤리)");
    }

    #[test]
    fn test_from_query_ignores_other_params() {
        let selection =
            CategorySelection::from_query("?page=2&category=TOK&type=ROUND&sort=price").unwrap();
        assert_eq!(selection.label(), "톡 (원형톡)");
    }

    #[test]
    fn test_from_query_decodes_percent() {
        let selection = CategorySelection::from_query("?category=PHONE%5FCASE&type=HARD").unwrap();
        assert_eq!(selection.category, "PHONE_CASE");
    }

    #[test]
    fn test_from_query_requires_both() {
        assert_eq!(CategorySelection::from_query(""), None);
        assert_eq!(CategorySelection::from_query("?"), None);
        assert_eq!(CategorySelection::from_query("?category=PHONE_CASE"), None);
        assert_eq!(CategorySelection::from_query("?type=HARD"), None);
        assert_eq!(CategorySelection::from_query("?category=&type=HARD"), None);
    }

    #[test]
    fn test_from_query_takes_first_duplicate() {
        let selection =
            CategorySelection::from_query("?category=TOK&category=AIRPODS&type=BUDS").unwrap();
        assert_eq!(selection.category, "TOK");
        assert_eq!(selection.label(), "톡 (버즈)");
    }

    #[test]
    fn test_from_query_survives_broken_unrelated_params() {
        let selection =
            CategorySelection::from_query("?category=TOK&type=ROUND&ref=%E0%A4").unwrap();
        assert_eq!(selection.label(), "톡 (원형톡)");

        let selection =
            CategorySelection::from_query("?category=TOK&type=ROUND&x[a]=1&x=2").unwrap();
        assert_eq!(selection.label(), "톡 (원형톡)");
    }

    #[test]
    fn test_from_query_decodes_lossily() {
        let selection = CategorySelection::from_query("?category=TOK%E0&type=HEART").unwrap();
        assert_eq!(selection.category, "TOK\u{FFFD}");
        assert_eq!(selection.label(), " (하트톡)");

        let selection = CategorySelection::from_query("?category=A+B&type=HARD").unwrap();
        assert_eq!(selection.category, "A B");
    }

    #[test]
    fn test_from_attributes() {
        let selection =
            CategorySelection::from_attributes(Some("AIRPODS".into()), Some("BUDS".into()));
        assert_eq!(selection.label(), "에어팟/버즈 (버즈)");

        let selection = CategorySelection::from_attributes(None, Some("HEART".into()));
        assert_eq!(selection.category, "");
        assert_eq!(selection.label(), " (하트톡)");
    }

    #[test]
    fn test_to_query() {
        let selection = CategorySelection::new("AIRPODS", "AIRPODS_PRO");
        assert_eq!(selection.to_query(), "category=AIRPODS&type=AIRPODS_PRO");
        assert_eq!(
            CategorySelection::from_query(&selection.to_query()),
            Some(selection)
        );
    }
}
