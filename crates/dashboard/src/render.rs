//! HTML rendering for the dashboard views.

use listings_core::listing::{ListingCategory, ListingType};
use maud::{html, Markup};

use crate::create_form::CreateListingForm;
use crate::edit_form::EditListingForm;
use crate::model::Listing;

/// Product list with inline edit form.
pub fn listing_table(listings: &[Listing], editing: Option<&EditListingForm>) -> Markup {
    html! {
        div class="max-w-6xl mx-auto p-4" {
            @if let Some(form) = editing {
                (edit_form(form))
            }
            h1 class="text-2xl font-bold mb-4" { "Product List" }
            table class="table-auto w-full border-collapse border border-gray-200 mb-4" {
                thead {
                    tr class="bg-gray-100" {
                        th class="border p-2" { "Title" }
                        th class="border p-2" { "Image" }
                        th class="border p-2" { "Price" }
                        th class="border p-2" { "Category" }
                        th class="border p-2" { "Type" }
                        th class="border p-2" { "Bedrooms" }
                        th class="border p-2" { "Actions" }
                    }
                }
                tbody {
                    @for listing in listings {
                        (listing_row(listing))
                    }
                }
            }
        }
    }
}

fn listing_row(listing: &Listing) -> Markup {
    html! {
        tr class="hover:bg-gray-50" data-id=(listing.id) {
            td class="border p-2" { (listing.title) }
            td class="border p-2" {
                @if let Some(src) = listing.thumbnail() {
                    img src=(src) alt="Product" class="w-24 h-auto";
                }
            }
            td class="border p-2" { (listing.price) }
            td class="border p-2" {
                @if let Some(category) = listing.category { (category.as_str()) }
            }
            td class="border p-2" {
                @if let Some(listing_type) = listing.listing_type { (listing_type.as_str()) }
            }
            td class="border p-2" {
                @if let Some(bed) = listing.bed { (bed) }
            }
            td class="border p-2" {
                button type="button" data-action="edit" data-id=(listing.id)
                    class="bg-yellow-500 text-white px-2 py-1 mr-2" { "Edit" }
                button type="button" data-action="delete" data-id=(listing.id)
                    class="bg-red-500 text-white px-2 py-1" { "Delete" }
            }
        }
    }
}

/// Inline edit form for one listing.
pub fn edit_form(form: &EditListingForm) -> Markup {
    html! {
        form class="border p-4 bg-gray-100 rounded" data-id=(form.id()) {
            h2 class="text-xl font-bold mb-4" { "Edit Product" }
            (text_input("title", "Title", &form.title))
            div class="mb-4" {
                label for="description" class="block text-sm font-medium text-gray-700" { "Description" }
                textarea id="description" name="description" class="w-full border p-2" { (form.description) }
            }
            (text_input("price", "Price", &form.price))
            (select("category", "Category", &category_options(), Some(form.category.as_str())))
            (select("type", "Type", &type_options(), Some(form.listing_type.as_str())))
            (bed_input(form.bed()))
            (image_list(form.img()))
            div class="flex gap-2 mt-4" {
                button type="submit" class="bg-green-500 text-white px-4 py-2" { "Save" }
                button type="button" data-action="cancel" class="bg-gray-500 text-white px-4 py-2" { "Cancel" }
            }
        }
    }
}

/// Stand-alone form for adding a listing.
pub fn create_form(form: &CreateListingForm) -> Markup {
    html! {
        form class="max-w-2xl mx-auto p-4" {
            h1 class="text-xl font-bold mb-4" { "Add New Product" }
            (text_input("title", "Title", &form.title))
            (select("category", "Category", &category_options(), form.category.map(ListingCategory::as_str)))
            (select("type", "Type", &type_options(), form.listing_type.map(ListingType::as_str)))
            (text_input("price", "Price", &form.price))
            (bed_input(form.bed()))
            div class="mb-4" {
                label for="description" class="block text-lg font-bold mb-2" { "Description" }
                textarea id="description" name="description" class="w-full border p-2"
                    placeholder="Write your product description here..." { (form.description) }
            }
            (image_list(form.img()))
            button type="submit" class="bg-green-500 text-white px-4 py-2" { "Save Product" }
        }
    }
}

fn text_input(id: &str, label: &str, value: &str) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-sm font-medium text-gray-700" { (label) }
            input id=(id) name=(id) type="text" value=(value) class="w-full border p-2" required;
        }
    }
}

fn bed_input(bed: Option<i64>) -> Markup {
    let value = bed.map(|b| b.to_string()).unwrap_or_default();
    html! {
        div class="mb-4" {
            label for="bed" class="block text-sm font-medium text-gray-700" { "Bedrooms" }
            input id="bed" name="bed" type="number" min="0" step="1" value=(value) class="w-full border p-2";
        }
    }
}

fn select(id: &str, label: &str, options: &[&'static str], selected: Option<&str>) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-sm font-medium text-gray-700" { (label) }
            select id=(id) name=(id) class="w-full border p-2" required {
                option value="" disabled selected[selected.is_none()] { "Select a " (label.to_lowercase()) }
                @for option in options {
                    option value=(option) selected[selected == Some(*option)] { (option) }
                }
            }
        }
    }
}

fn image_list(img: &[String]) -> Markup {
    html! {
        div class="mb-4 upload" {
            @for url in img.iter().filter(|url| !url.is_empty()) {
                img src=(url) alt="Product" class="w-24 h-auto inline-block mr-2";
            }
        }
    }
}

fn category_options() -> Vec<&'static str> {
    ListingCategory::ALL.iter().map(|c| c.as_str()).collect()
}

fn type_options() -> Vec<&'static str> {
    ListingType::ALL.iter().map(|t| t.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: i64, img: Vec<&str>) -> Listing {
        Listing {
            id,
            title: "Lakeview <House>".to_string(),
            description: String::new(),
            img: img.into_iter().map(String::from).collect(),
            price: "250000".to_string(),
            category: Some(ListingCategory::Sale),
            listing_type: None,
            bed: Some(3),
        }
    }

    #[test]
    fn one_row_per_listing_with_escaped_title() {
        let html = listing_table(&[listing(1, vec![]), listing(2, vec![])], None).into_string();
        assert_eq!(html.matches("<tr class=\"hover:bg-gray-50\"").count(), 2);
        assert!(html.contains("Lakeview &lt;House&gt;"));
        assert!(!html.contains("<House>"));
    }

    #[test]
    fn thumbnail_only_when_image_present() {
        let with = listing_table(&[listing(1, vec!["https://x/1.jpg", "https://x/2.jpg"])], None)
            .into_string();
        assert!(with.contains("src=\"https://x/1.jpg\""));
        assert!(!with.contains("https://x/2.jpg"));

        let without = listing_table(&[listing(1, vec![])], None).into_string();
        assert!(!without.contains("<img"));

        let blank_first = listing_table(&[listing(1, vec!["", "https://x/2.jpg"])], None)
            .into_string();
        assert!(blank_first.contains("src=\"https://x/2.jpg\""));
    }

    #[test]
    fn edit_form_rendered_above_table_with_selection() {
        let form = EditListingForm::new(listing(5, vec!["https://x/1.jpg"]));
        let html = listing_table(&[listing(5, vec![])], Some(&form)).into_string();

        let form_at = html.find("Edit Product").unwrap();
        let table_at = html.find("Product List").unwrap();
        assert!(form_at < table_at);
        // Missing type falls back to Residential in the form.
        assert!(html.contains("<option value=\"Residential\" selected>"));
    }

    #[test]
    fn create_form_starts_unselected_without_thumbnails() {
        let html = create_form(&CreateListingForm::new()).into_string();
        assert!(html.contains("Select a category"));
        assert!(!html.contains("<img"));
        assert!(html.contains("min=\"0\""));
    }
}
