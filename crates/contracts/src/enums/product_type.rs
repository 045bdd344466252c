use serde::{Deserialize, Serialize};

/// Типы товаров (подкатегории)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Hard,
    Jelly,
    Card,
    Zflip,
    Round,
    Heart,
    Acrylic,
    #[serde(rename = "AIRPODS_1_2")]
    Airpods1And2,
    AirpodsPro,
    #[serde(rename = "AIRPODS_3")]
    Airpods3,
    Buds,
    AppleWatch,
}

impl ProductType {
    /// Код типа, как он приходит в `?type=` и `data-type`
    pub fn code(&self) -> &'static str {
        match self {
            ProductType::Hard => "HARD",
            ProductType::Jelly => "JELLY",
            ProductType::Card => "CARD",
            ProductType::Zflip => "ZFLIP",
            ProductType::Round => "ROUND",
            ProductType::Heart => "HEART",
            ProductType::Acrylic => "ACRYLIC",
            ProductType::Airpods1And2 => "AIRPODS_1_2",
            ProductType::AirpodsPro => "AIRPODS_PRO",
            ProductType::Airpods3 => "AIRPODS_3",
            ProductType::Buds => "BUDS",
            ProductType::AppleWatch => "APPLE_WATCH",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductType::Hard => "하드",
            ProductType::Jelly => "젤리",
            ProductType::Card => "카드 수납",
            ProductType::Zflip => "Z플립",
            ProductType::Round => "원형톡",
            ProductType::Heart => "하트톡",
            ProductType::Acrylic => "아크릴톡",
            ProductType::Airpods1And2 => "에어팟1/2세대",
            ProductType::AirpodsPro => "에어팟PRO",
            ProductType::Airpods3 => "에어팟3세대",
            ProductType::Buds => "버즈",
            ProductType::AppleWatch => "애플워치",
        }
    }

    pub fn all() -> Vec<ProductType> {
        vec![
            ProductType::Hard,
            ProductType::Jelly,
            ProductType::Card,
            ProductType::Zflip,
            ProductType::Round,
            ProductType::Heart,
            ProductType::Acrylic,
            ProductType::Airpods1And2,
            ProductType::AirpodsPro,
            ProductType::Airpods3,
            ProductType::Buds,
            ProductType::AppleWatch,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "HARD" => Some(ProductType::Hard),
            "JELLY" => Some(ProductType::Jelly),
            "CARD" => Some(ProductType::Card),
            "ZFLIP" => Some(ProductType::Zflip),
            "ROUND" => Some(ProductType::Round),
            "HEART" => Some(ProductType::Heart),
            "ACRYLIC" => Some(ProductType::Acrylic),
            "AIRPODS_1_2" => Some(ProductType::Airpods1And2),
            "AIRPODS_PRO" => Some(ProductType::AirpodsPro),
            "AIRPODS_3" => Some(ProductType::Airpods3),
            "BUDS" => Some(ProductType::Buds),
            "APPLE_WATCH" => Some(ProductType::AppleWatch),
            _ => None,
        }
    }
}

/// Название типа по коду; для неизвестного кода пустая строка
pub fn type_display(code: &str) -> &'static str {
    ProductType::from_code(code)
        .map(|t| t.display_name())
        .unwrap_or("")
}
