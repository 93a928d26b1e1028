mod common;

use rust_decimal_macros::dec;

use common::TestApp;
use widget_api::{
    errors::ServiceError,
    services::widgets::{NewWidget, WidgetUpdate},
};

fn sample_widget(name: &str) -> NewWidget {
    NewWidget {
        name: name.to_string(),
        description: "A widget description".to_string(),
        price: dec!(10.99),
    }
}

#[tokio::test]
async fn create_and_round_trip() {
    let app = TestApp::new().await;
    let service = &app.state.widgets;

    let created = service
        .create_widget(sample_widget("Widget von Hammersmark"))
        .await
        .expect("create widget");
    assert_eq!(created.name, "Widget von Hammersmark");
    assert_eq!(created.description, "A widget description");
    assert_eq!(created.price, dec!(10.99));

    let fetched = service
        .get_widget_by_name("Widget von Hammersmark")
        .await
        .expect("get widget");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn duplicate_create_is_rejected_without_side_effects() {
    let app = TestApp::new().await;
    let service = &app.state.widgets;

    service
        .create_widget(sample_widget("Duplicate Widget Name"))
        .await
        .expect("first create");

    let mut second = sample_widget("Duplicate Widget Name");
    second.description = "Duplicate Widget Description".to_string();
    second.price = dec!(20.99);

    let err = service.create_widget(second).await.unwrap_err();
    assert!(matches!(err, ServiceError::DuplicateName(_)));
    assert_eq!(
        err.to_string(),
        "Widget with name 'Duplicate Widget Name' already exists"
    );

    // The original record is untouched and no second record exists
    let all = service.get_all_widgets().await.expect("list");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].description, "A widget description");
    assert_eq!(all[0].price, dec!(10.99));
}

#[tokio::test]
async fn list_returns_created_widgets() {
    let app = TestApp::new().await;
    let service = &app.state.widgets;

    assert!(service.get_all_widgets().await.expect("list").is_empty());

    service
        .create_widget(sample_widget("Widget A"))
        .await
        .expect("create A");
    service
        .create_widget(sample_widget("Widget B"))
        .await
        .expect("create B");

    let all = service.get_all_widgets().await.expect("list");
    let names: Vec<&str> = all.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["Widget A", "Widget B"]);
}

#[tokio::test]
async fn update_changes_only_description_and_price() {
    let app = TestApp::new().await;
    let service = &app.state.widgets;

    service
        .create_widget(sample_widget("Existing Widget"))
        .await
        .expect("create");

    let updated = service
        .update_widget(
            "Existing Widget",
            WidgetUpdate {
                description: "Updated Description".to_string(),
                price: dec!(99.99),
            },
        )
        .await
        .expect("update");

    assert_eq!(updated.name, "Existing Widget");
    assert_eq!(updated.description, "Updated Description");
    assert_eq!(updated.price, dec!(99.99));

    let fetched = service
        .get_widget_by_name("Existing Widget")
        .await
        .expect("get");
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn missing_names_yield_not_found() {
    let app = TestApp::new().await;
    let service = &app.state.widgets;

    let err = service.get_widget_by_name("Nope").await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
    assert_eq!(err.to_string(), "Widget not found with name: Nope");

    let err = service
        .update_widget(
            "Nope",
            WidgetUpdate {
                description: "Updated Description".to_string(),
                price: dec!(99.99),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let err = service.delete_widget("Nope").await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    assert!(service.get_all_widgets().await.expect("list").is_empty());
}

#[tokio::test]
async fn delete_removes_the_record() {
    let app = TestApp::new().await;
    let service = &app.state.widgets;

    service
        .create_widget(sample_widget("WidgetToDelete"))
        .await
        .expect("create");

    service
        .delete_widget("WidgetToDelete")
        .await
        .expect("delete");

    let err = service.get_widget_by_name("WidgetToDelete").await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}
