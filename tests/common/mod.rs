//! Shared fixtures for integration and property tests.

#![allow(dead_code)]

use pagesearch::Page;

/// Build a page with the given searchable fields.
pub fn make_page(
    identifier: &str,
    title: Option<&str>,
    body: Option<&str>,
    last_updated: &str,
) -> Page {
    Page {
        identifier: identifier.to_string(),
        title: title.map(str::to_string),
        body: body.map(str::to_string),
        image_caption: None,
        image_accessibility_label: None,
        image: None,
        email_module: Vec::new(),
        last_updated: last_updated.to_string(),
    }
}

/// A small realistic content set: handbook, meeting notes, contacts page
/// with an email module, an image page, and an untitled page.
pub fn fixture_pages() -> Vec<Page> {
    let mut contacts = make_page(
        "contacts",
        Some("Office Contacts"),
        None,
        "2024-02-14T09:30:00Z",
    );
    contacts.email_module = vec![
        "frontdesk@example.com".to_string(),
        "benefits@example.com".to_string(),
    ];

    let mut gallery = make_page("gallery", Some("Office Tour"), None, "2023-11-20T16:45:00Z");
    gallery.image = Some("img-lobby".to_string());
    gallery.image_caption = Some("The renovated lobby".to_string());
    gallery.image_accessibility_label = Some("Photo of the entrance hall".to_string());

    vec![
        make_page(
            "handbook",
            Some("Employee Handbook"),
            Some("Policies, benefits, and onboarding procedures."),
            "2024-01-10T00:00:00Z",
        ),
        make_page(
            "notes",
            Some("Meeting Notes"),
            Some("quarterly meeting"),
            "2024-03-05T00:00:00Z",
        ),
        contacts,
        gallery,
        make_page(
            "scratch",
            None,
            Some("untitled scratch page about parking"),
            "2024-03-05T00:00:00Z",
        ),
    ]
}
