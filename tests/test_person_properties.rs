//! Property tests for the copy derived from a person record.

use folio::content::schema::Person;
use proptest::prelude::*;

proptest! {
    /// The display name is always the two name parts joined by one space.
    #[test]
    fn prop_name_joins_parts(
        first in "[A-Za-z]{1,12}",
        last in "[A-Za-z]{1,12}",
    ) {
        let person = Person::new(
            first.clone(),
            last.clone(),
            "Full Stack Developer",
            "/images/avatar.jpg",
            "America/Toronto",
            vec![],
        );
        prop_assert_eq!(&person.name, &format!("{first} {last}"));
    }

    /// The portfolio title embeds the display name for any person record.
    #[test]
    fn prop_portfolio_title_embeds_name(
        first in "[A-Za-z]{1,12}",
        last in "[A-Za-z]{1,12}",
    ) {
        let person = Person::new(
            first.clone(),
            last.clone(),
            "Developer",
            "/images/avatar.jpg",
            "America/Toronto",
            vec![],
        );
        prop_assert_eq!(
            person.portfolio_title(),
            format!("{first} {last}'s Portfolio")
        );
    }

    /// The about description embeds name, role, and location verbatim.
    #[test]
    fn prop_about_description_embeds_profile(
        first in "[A-Za-z]{1,12}",
        last in "[A-Za-z]{1,12}",
        role in "[A-Za-z][A-Za-z ]{0,23}",
        location in "[A-Za-z]{2,10}/[A-Za-z_]{2,16}",
    ) {
        let person = Person::new(
            first,
            last,
            role.clone(),
            "/images/avatar.jpg",
            location.clone(),
            vec![],
        );
        let description = person.about_description();
        prop_assert!(description.contains(&person.name));
        prop_assert!(description.contains(&role));
        prop_assert!(description.contains(&location));
    }

    /// The newsletter title uses the first name alone, never the full name.
    #[test]
    fn prop_newsletter_title_uses_first_name(
        first in "[A-Za-z]{1,12}",
        last in "[A-Za-z]{1,12}",
    ) {
        let person = Person::new(
            first.clone(),
            last,
            "Developer",
            "/images/avatar.jpg",
            "America/Toronto",
            vec![],
        );
        prop_assert_eq!(
            person.newsletter_title(),
            format!("Subscribe to {first}'s Newsletter")
        );
    }
}
