use serde::{Deserialize, Serialize};

/// Основные категории товаров каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    PhoneCase,
    Tok,
    Airpods,
    Digital,
}

impl ProductCategory {
    /// Код категории, как он приходит в `?category=` и `data-category`
    pub fn code(&self) -> &'static str {
        match self {
            ProductCategory::PhoneCase => "PHONE_CASE",
            ProductCategory::Tok => "TOK",
            ProductCategory::Airpods => "AIRPODS",
            ProductCategory::Digital => "DIGITAL",
        }
    }

    /// Название для заголовка страницы
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::PhoneCase => "폰 케이스",
            ProductCategory::Tok => "톡",
            ProductCategory::Airpods => "에어팟/버즈",
            ProductCategory::Digital => "디지털",
        }
    }

    pub fn all() -> Vec<ProductCategory> {
        vec![
            ProductCategory::PhoneCase,
            ProductCategory::Tok,
            ProductCategory::Airpods,
            ProductCategory::Digital,
        ]
    }

    /// Парсинг из кода (с учётом регистра)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PHONE_CASE" => Some(ProductCategory::PhoneCase),
            "TOK" => Some(ProductCategory::Tok),
            "AIRPODS" => Some(ProductCategory::Airpods),
            "DIGITAL" => Some(ProductCategory::Digital),
            _ => None,
        }
    }
}

/// Название категории по коду; для неизвестного кода пустая строка
pub fn category_display(code: &str) -> &'static str {
    ProductCategory::from_code(code)
        .map(|c| c.display_name())
        .unwrap_or("")
}
