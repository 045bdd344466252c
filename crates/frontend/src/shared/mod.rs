pub mod category_heading;
