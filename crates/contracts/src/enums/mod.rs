pub mod product_category;
pub mod product_type;

pub use product_category::{category_display, ProductCategory};
pub use product_type::{type_display, ProductType};
