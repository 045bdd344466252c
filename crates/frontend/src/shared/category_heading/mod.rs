//! Заголовок категории на странице списка товаров.
//!
//! При загрузке страницы заголовок `#main-category` заполняется из
//! `?category=&type=`, а при клике по `.nav-link` — из её `data-category`
//! и `data-type`.

pub mod dom;
pub mod error;
pub mod state;

pub use error::HeadingError;
pub use state::{HeadingState, SelectionSource};

use contracts::shared::category_selection::CategorySelection;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

#[component]
fn CategoryHeading(heading: HtmlElement, search: String, nav_links: Vec<Element>) -> impl IntoView {
    let state = HeadingState::new();

    // Пишем в заголовок только после первого выбора
    Effect::new(move |_| {
        state.with_label(|text| heading.set_text_content(Some(text)));
    });

    if let Some(selection) = CategorySelection::from_query(&search) {
        state.apply(&selection, SelectionSource::Query);
    }

    let mut bound = 0;
    for link in &nav_links {
        match dom::on_nav_link_click(link, state) {
            Ok(()) => bound += 1,
            Err(err) => log::warn!("nav link skipped: {}", err),
        }
    }
    log::info!("category heading: {} nav links bound", bound);
}

/// Подключает заголовок к существующему `#main-category`.
pub fn mount_category_heading() -> Result<(), HeadingError> {
    let document = dom::document()?;
    let heading = dom::heading(&document)?;
    let search = dom::location_search();
    let nav_links = dom::nav_links(&document);

    // Компонент ничего не рендерит, только держит владельца для Effect
    leptos::mount::mount_to_body(move || {
        view! { <CategoryHeading heading=heading search=search nav_links=nav_links /> }
    });

    Ok(())
}

/// Запускает `mount_category_heading` после разбора документа.
pub fn init_on_dom_ready() -> Result<(), HeadingError> {
    let document = dom::document()?;
    if document.ready_state() != "loading" {
        return mount_category_heading();
    }

    let handler: Closure<dyn FnMut()> = Closure::once(|| {
        if let Err(err) = mount_category_heading() {
            log::warn!("category heading not mounted: {}", err);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", handler.as_ref().unchecked_ref())
        .map_err(|e| HeadingError::Listener(format!("{:?}", e)))?;
    handler.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            HeadingError::MissingElement(dom::HEADING_ID.to_string()).to_string(),
            "element #main-category not found"
        );
        assert_eq!(HeadingError::NoWindow.to_string(), "window object is not available");
    }
}
