use studio_console::model::employee::Employee;
use studio_console::model::lead::{Lead, LeadStatus};
use studio_console::view::ListView;

fn lead(id: u64, first: &str, last: &str, source: &str, status: LeadStatus) -> Lead {
    Lead {
        id: Some(id),
        firstName: first.to_string(),
        lastName: last.to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        mobile: "+91 98400 11223".to_string(),
        secondaryMobile: None,
        doorNo: None,
        street: None,
        city: "Chennai".to_string(),
        district: None,
        state: "Tamil Nadu".to_string(),
        country: "India".to_string(),
        eventType: "wedding".to_string(),
        leadSource: source.to_string(),
        budget: None,
        eventDate: None,
        advance: None,
        paymentDate: None,
        notes: None,
        status,
        createdBy: None,
        createdAt: None,
        updatedAt: None,
    }
}

fn employee(id: u64, first: &str) -> Employee {
    Employee {
        id: Some(id),
        firstName: first.to_string(),
        lastName: "Raman".to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        mobile: "+91 98400 55667".to_string(),
        secondaryMobile: None,
        doorNo: None,
        street: None,
        city: "Chennai".to_string(),
        district: None,
        state: "Tamil Nadu".to_string(),
        country: "India".to_string(),
        workLocation: None,
        salesType: None,
        availability: None,
        experience: None,
        skills: None,
        portfolio: None,
        reason: None,
        profileImage: None,
        idDocument: None,
        createdAt: None,
        createdBy: None,
        updatedAt: None,
        updatedBy: None,
        isActive: true,
        isDelete: false,
    }
}

#[test]
fn lead_actions_follow_selection_count() {
    let mut view: ListView<Lead> = ListView::new(10);
    view.refresh(vec![
        lead(1, "Aarav", "Sharma", "instagram", LeadStatus::New),
        lead(2, "Meera", "Iyer", "referral", LeadStatus::Contacted),
        lead(3, "Rahul", "Nair", "facebook", LeadStatus::New),
    ]);

    // Nothing selected: only Add.
    let actions = view.actions();
    assert!(actions.add);
    assert!(!actions.update);
    assert!(!actions.details);
    assert!(!actions.delete);

    // One selected: Update/Details/Delete, no Add.
    view.select(1);
    let actions = view.actions();
    assert!(!actions.add);
    assert!(actions.update);
    assert!(actions.details);
    assert!(actions.delete);

    // Two selected: Delete only.
    view.select(2);
    let actions = view.actions();
    assert!(!actions.add);
    assert!(!actions.update);
    assert!(!actions.details);
    assert!(actions.delete);
}

#[test]
fn employee_actions_follow_selection_count() {
    let mut view: ListView<Employee> = ListView::new(10);
    view.refresh(vec![employee(1, "Priya"), employee(2, "Karthik")]);

    assert!(view.actions().add);
    view.select(1);
    assert!(view.actions().update && view.actions().details);
    view.select(2);
    assert!(view.actions().delete && !view.actions().update);
}

#[test]
fn global_filter_is_contains_and_case_insensitive() {
    let mut view: ListView<Lead> = ListView::new(10);
    view.refresh(vec![
        lead(1, "Aarav", "Sharma", "instagram", LeadStatus::New),
        lead(2, "Meera", "Iyer", "referral", LeadStatus::Contacted),
    ]);

    view.set_global_filter(Some("shar".to_string()));
    let filtered = view.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, Some(1));

    view.set_global_filter(Some("MEERA".to_string()));
    assert_eq!(view.filtered().len(), 1);

    view.set_global_filter(None);
    assert_eq!(view.filtered().len(), 2);
}

#[test]
fn column_filter_is_exact_match() {
    let mut view: ListView<Lead> = ListView::new(10);
    view.refresh(vec![
        lead(1, "Aarav", "Sharma", "instagram", LeadStatus::New),
        lead(2, "Meera", "Iyer", "referral", LeadStatus::Contacted),
        lead(3, "Rahul", "Nair", "instagram", LeadStatus::Contacted),
    ]);

    view.set_column_filter("leadSource", Some("instagram".to_string()));
    assert_eq!(view.filtered().len(), 2);

    view.set_column_filter("status", Some("Contacted".to_string()));
    let filtered = view.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, Some(3));

    // Substring does not match a categorical column.
    view.set_column_filter("leadSource", Some("insta".to_string()));
    assert_eq!(view.filtered().len(), 0);
}

#[test]
fn pagination_windows_the_filtered_rows() {
    let mut view: ListView<Lead> = ListView::new(2);
    view.refresh(
        (1..=5)
            .map(|i| lead(i, &format!("Lead{i}"), "Test", "referral", LeadStatus::New))
            .collect(),
    );

    assert_eq!(view.page_count(), 3);
    assert_eq!(view.page_rows().len(), 2);

    view.set_page(2);
    assert_eq!(view.page_rows().len(), 1);

    // Out-of-range pages clamp to the last one.
    view.set_page(99);
    assert_eq!(view.page(), 2);
}

#[test]
fn refresh_drops_selections_that_no_longer_resolve() {
    let mut view: ListView<Lead> = ListView::new(10);
    view.refresh(vec![
        lead(1, "Aarav", "Sharma", "instagram", LeadStatus::New),
        lead(2, "Meera", "Iyer", "referral", LeadStatus::Contacted),
    ]);
    view.select(1);
    view.select(2);
    assert_eq!(view.selection_count(), 2);

    // Row 2 disappeared server-side; its selection goes with it.
    view.refresh(vec![lead(1, "Aarav", "Sharma", "instagram", LeadStatus::New)]);
    assert_eq!(view.selected_ids(), vec![1]);

    // Selecting a row that does not exist is a no-op.
    view.select(99);
    assert_eq!(view.selection_count(), 1);
}
