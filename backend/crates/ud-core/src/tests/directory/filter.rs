use crate::tests::remote_user;
use crate::{UserRecord, filter_users};

fn sample() -> Vec<UserRecord> {
    vec![
        remote_user(1, "Leanne Graham", "Sincere@april.biz"),
        remote_user(2, "Ervin Howell", "Shanna@melissa.tv"),
        remote_user(3, "Clementine Bauch", "Nathan@yesenia.net"),
        remote_user(4, "Patricia Lebsack", "Julianne.OConner@kory.org"),
    ]
}

fn ids(users: &[&UserRecord]) -> Vec<String> {
    users.iter().map(|user| user.id.to_string()).collect()
}

#[test]
fn given_empty_query_when_filter_then_whole_set_in_order() {
    let users = sample();

    let result = filter_users(&users, "");

    assert_eq!(ids(&result), vec!["1", "2", "3", "4"]);
}

#[test]
fn given_lowercase_name_fragment_when_filter_then_matches_case_insensitively() {
    let users = vec![remote_user(1, "Leanne Graham", "Sincere@april.biz")];

    let result = filter_users(&users, "leanne");

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Leanne Graham");
}

#[test]
fn given_mixed_case_query_when_filter_then_stored_casing_ignored() {
    let users = sample();

    assert_eq!(ids(&filter_users(&users, "GRAHAM")), vec!["1"]);
    assert_eq!(ids(&filter_users(&users, "sHaNnA@")), vec!["2"]);
}

#[test]
fn given_query_matching_email_only_when_filter_then_included() {
    let users = sample();

    let result = filter_users(&users, "kory.org");

    assert_eq!(ids(&result), vec!["4"]);
}

#[test]
fn given_query_matching_several_when_filter_then_relative_order_kept() {
    let users = sample();

    // "an" hits Leanne, Shanna, Clementine/Nathan, Julianne
    let result = filter_users(&users, "an");

    assert_eq!(ids(&result), vec!["1", "2", "3", "4"]);

    let result = filter_users(&users, "e.net");
    assert_eq!(ids(&result), Vec::<String>::new());

    let result = filter_users(&users, ".net");
    assert_eq!(ids(&result), vec!["3"]);
}

#[test]
fn given_query_matching_phone_or_company_when_filter_then_not_included() {
    let mut users = sample();
    users[0].company = Some(crate::Company::Name("Romaguera-Crona".into()));

    assert!(filter_users(&users, "romaguera").is_empty());
    assert!(filter_users(&users, "736-8031").is_empty());
}

#[test]
fn given_any_query_when_filter_then_result_is_exact_matching_subset() {
    let users = sample();

    for query in ["a", "E", "org", "xyz", "@", "ll"] {
        let expected: Vec<String> = users
            .iter()
            .filter(|user| {
                user.name.to_lowercase().contains(&query.to_lowercase())
                    || user.email.to_lowercase().contains(&query.to_lowercase())
            })
            .map(|user| user.id.to_string())
            .collect();

        assert_eq!(ids(&filter_users(&users, query)), expected, "query {query:?}");
    }
}
