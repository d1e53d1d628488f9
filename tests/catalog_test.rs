mod support;

use studio_console::dto::catalog_dto::{AddonForm, PackageForm, RoleForm};
use studio_console::dto::{first_message, EditorMode};
use studio_console::model::user::AuthUser;
use studio_console::service::ServiceError;

use support::{spawn_backend, test_app};

#[tokio::test]
async fn addon_editor_covers_create_update_delete() {
    let (base_url, state) = spawn_backend().await;
    let app = test_app(&base_url, "addons");
    app.session
        .login(AuthUser {
            userId: 1,
            username: "admin".to_string(),
            displayName: None,
            role: Some("admin".to_string()),
        })
        .unwrap();

    let form = AddonForm {
        description: "Drone coverage".to_string(),
        unit: "per event".to_string(),
        price: 15_000.0,
        initial: None,
    };
    let created = app.catalog.save_addon(&form).await.unwrap();
    assert!(created.id.is_some());
    assert_eq!(created.createdBy.as_deref(), Some("admin"));

    // Reopening switches to update mode and edits in place.
    let mut edit = AddonForm::from_addon(created.clone());
    assert_eq!(edit.mode(), EditorMode::Update);
    edit.price = 18_000.0;
    let updated = app.catalog.save_addon(&edit).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.price, 18_000.0);

    let listed = app.catalog.addons().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].price, 18_000.0);

    app.catalog.delete_addon(created.id.unwrap()).await.unwrap();
    assert!(state.addons.lock().unwrap().is_empty());
}

#[tokio::test]
async fn addon_editor_requires_its_fields() {
    let (base_url, state) = spawn_backend().await;
    let app = test_app(&base_url, "addons-invalid");

    let form = AddonForm {
        description: String::new(),
        unit: "per event".to_string(),
        price: 1_000.0,
        initial: None,
    };
    match app.catalog.save_addon(&form).await {
        Err(ServiceError::Validation(errors)) => {
            assert_eq!(first_message(&errors).as_deref(), Some("Description is required"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(state.addons.lock().unwrap().is_empty());
}

#[tokio::test]
async fn package_template_round_trips_with_selected_addons() {
    let (base_url, _state) = spawn_backend().await;
    let app = test_app(&base_url, "packages");

    let form = PackageForm {
        title: "Classic Wedding".to_string(),
        price: 120_000.0,
        services: vec!["Candid photography".to_string(), "Traditional video".to_string()],
        deliverables: vec!["40 page album".to_string()],
        addon_ids: vec![3, 5],
    };
    let created = app.catalog.create_package(&form).await.unwrap();
    let id = created.id.unwrap();

    let fetched = app.catalog.package(id).await.unwrap();
    assert_eq!(fetched.title, "Classic Wedding");
    assert_eq!(fetched.services.len(), 2);
    assert_eq!(fetched.addonIds, vec![3, 5]);

    app.catalog.delete_package(id).await.unwrap();
    assert!(app.catalog.packages().await.unwrap().is_empty());
}

#[tokio::test]
async fn package_needs_at_least_one_service() {
    let (base_url, _state) = spawn_backend().await;
    let app = test_app(&base_url, "packages-invalid");

    let form = PackageForm {
        title: "Empty".to_string(),
        price: 1_000.0,
        services: vec![],
        deliverables: vec![],
        addon_ids: vec![],
    };
    match app.catalog.create_package(&form).await {
        Err(ServiceError::Validation(errors)) => {
            assert_eq!(
                first_message(&errors).as_deref(),
                Some("At least one service is required")
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn roles_are_added_and_renamed() {
    let (base_url, state) = spawn_backend().await;
    let app = test_app(&base_url, "roles");

    let form = RoleForm {
        role_name: "Photographer".to_string(),
        initial: None,
    };
    let created = app.catalog.save_role(&form).await.unwrap();
    assert_eq!(created.roleName, "Photographer");

    let rename = RoleForm {
        role_name: "Lead Photographer".to_string(),
        initial: Some(created.clone()),
    };
    let updated = app.catalog.save_role(&rename).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.roleName, "Lead Photographer");

    assert_eq!(state.roles.lock().unwrap().len(), 1);
    assert_eq!(app.catalog.roles().await.unwrap()[0].roleName, "Lead Photographer");
}
