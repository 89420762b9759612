use builder_framework::{Builder, BuilderError, FieldValue, ValidationError};
use builder_recipe::model::{Product, ProductBuilder, User, UserBuilder};
use builder_recipe::presets;

/// Full flow: presets, fan-out, and the presets left untouched afterwards.
#[test]
fn test_customer_preset_fans_out_into_independent_orders() {
    let widget = presets::widget().expect("Failed to build widget preset");
    let alice = presets::customer_orders("Alice", "alice@example.com", "Springfield")
        .expect("Failed to build customer preset");

    let first = presets::order(&alice, [presets::line(&widget, 2).unwrap()], Some("first"))
        .expect("Failed to build first order");
    let second = presets::order(
        &alice,
        [presets::line(&widget, 1).unwrap(), presets::line(&widget, 3).unwrap()],
        None,
    )
    .expect("Failed to build second order");

    assert_eq!(first.user, second.user);
    assert_eq!(first.lines.len(), 1);
    assert_eq!(second.lines.len(), 2);
    assert_eq!(first.note.as_deref(), Some("first"));
    assert_eq!(first.total(), 51.0);
    assert_eq!(second.total(), 102.0);

    // The preset never received any lines
    let bare = alice.build::<builder_recipe::model::Order>().unwrap_err();
    assert!(bare.to_string().contains("order has no lines"));
}

#[test]
fn test_template_variants_do_not_leak_into_preset() {
    let widget = presets::widget().unwrap();

    let mut discounted = widget.set("price", 19.99).unwrap();
    ProductBuilder::from(&mut discounted).add_tags("sale").unwrap();
    let sale: Product = discounted.build().unwrap();
    let regular: Product = widget.build().unwrap();

    assert_eq!(sale.price, 19.99);
    assert_eq!(sale.tags, vec!["hardware", "sale"]);
    assert_eq!(regular.price, 25.5);
    assert_eq!(regular.tags, vec!["hardware"]);
}

#[test]
fn test_nested_optional_builder() {
    let mut builder = Builder::of::<User>();
    UserBuilder::from(&mut builder)
        .set_name("Bob")
        .unwrap()
        .set_email("bob@example.com")
        .unwrap()
        .build_from_address()
        .unwrap()
        .set_street("2 Side Road")
        .unwrap()
        .set_city("Shelbyville")
        .unwrap()
        .set_postcode("SH1")
        .unwrap();

    let user: User = builder.build().unwrap();
    let address = user.address.expect("address should be built");
    assert_eq!(address.city, "Shelbyville");
    assert_eq!(address.postcode.as_deref(), Some("SH1"));
}

#[test]
fn test_address_can_be_cleared_after_build_from() {
    let mut builder = Builder::of::<User>();
    builder.set("name", "Bob").unwrap().set("email", "b@example.com").unwrap();
    builder.build_from("address").unwrap().set("city", "Nowhere").unwrap();
    builder.set("address", None::<FieldValue>).unwrap();

    assert_eq!(builder.build::<User>().unwrap().address, None);
}

#[test]
fn test_missing_required_field_propagates() {
    let mut builder = Builder::of::<User>();
    builder.set("name", "Bob").unwrap();

    match builder.build::<User>() {
        Err(BuilderError::Validation(ValidationError::Invalid { model, source })) => {
            assert_eq!(model, "User");
            assert!(source.to_string().contains("missing field `email`"));
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}
