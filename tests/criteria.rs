use chrono::NaiveDate;
use sql_criteria::{
    projection, restrictions, ColumnCodec, CollectionRef, Criterion, Dialect, FlagSet,
    FlagSetCodec, MatchMode, Operator, ProjectionList, PropertyMatchMode, SqlValue, TableQuery,
};
use strum_macros::VariantArray;

#[derive(Clone, Copy, Debug, PartialEq, Eq, VariantArray)]
enum Role {
    User,
    Admin,
    Auditor,
}

fn user_query(dialect: impl Dialect + 'static) -> TableQuery {
    TableQuery::builder("this_")
        .dialect(dialect)
        .property("name", "name")
        .property("email", "email")
        .property("flags", "flags")
        .property("created_at", "created_at")
        .composite_property("amount", ["amount_value", "amount_currency"])
        .collection("roles", CollectionRef::new("user_roles", "user_id", "id"))
        .build()
}

fn placeholders(sql: &str) -> usize {
    sql.matches('?').count()
}

#[test]
fn composes_a_full_where_clause() {
    let query = user_query(sql_criteria::Postgres);
    let date = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();

    let criterion = restrictions::conjunction(
        restrictions::eq("name", "Ada"),
        restrictions::not_ilike("email", "spam", MatchMode::Anywhere),
        vec![
            restrictions::has("flags", Role::Admin),
            Operator::Ge.restrict_date("created_at", date),
            Operator::Gt.restrict_collection_size("roles", 1),
        ],
    );

    assert_eq!(
        criterion.to_sql(&query).unwrap(),
        "(this_.name = ? \
         and (not (this_.email ilike ?) or (this_.email = ? or this_.email is null)) \
         and (this_.flags & 2 > 0) \
         and this_.created_at >= ? \
         and ? < (select count(*) from user_roles where user_roles.user_id = this_.id))"
    );

    let values = criterion.bind_values(&query).unwrap();
    assert_eq!(
        values,
        vec![
            SqlValue::Text("Ada".to_owned()),
            SqlValue::Text("%spam%".to_owned()),
            SqlValue::Text(String::new()),
            SqlValue::Timestamp(date.and_hms_opt(0, 0, 0).unwrap()),
            SqlValue::Int64(1),
        ]
    );
}

#[test]
fn placeholder_and_bind_counts_always_agree() {
    let query = user_query(sql_criteria::MySql);
    let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();

    let criteria: Vec<Box<dyn Criterion>> = vec![
        restrictions::eq("name", ""),
        restrictions::ne("name", "x"),
        restrictions::is_not_empty("email"),
        restrictions::ilike("email", "Spam", MatchMode::Start),
        restrictions::not_ilike("email", "Spam", MatchMode::End),
        restrictions::reverse_ilike("name", "Ada Lovelace", PropertyMatchMode::Anywhere),
        restrictions::not_reverse_ilike("name", "Ada", PropertyMatchMode::Start),
        restrictions::has("flags", Role::Auditor),
        restrictions::none("flags", FlagSet::of([Role::User, Role::Admin])),
        restrictions::between("created_at", 1, 9),
        restrictions::eq_value("amount", 10),
        Operator::Ne.restrict_date("created_at", date),
        Operator::Eq.restrict_flag("flags", Role::User).unwrap(),
        Operator::Le.restrict_collection_size("roles", 3),
        restrictions::bit_contains("flags", 6),
    ];

    for criterion in criteria {
        let sql = criterion.to_sql(&query).unwrap();
        let values = criterion.bind_values(&query).unwrap();
        assert_eq!(
            placeholders(&sql),
            values.len(),
            "placeholder/bind mismatch for {sql}"
        );
    }
}

#[test]
fn reverse_ilike_changes_shape_with_the_dialect() {
    let criterion = restrictions::reverse_ilike("name", "Ada", PropertyMatchMode::Anywhere);

    let postgres = user_query(sql_criteria::Postgres);
    assert_eq!(
        criterion.to_sql(&postgres).unwrap(),
        "? ilike ('%' || this_.name || '%')"
    );

    let mysql = user_query(sql_criteria::MySql);
    assert_eq!(
        criterion.to_sql(&mysql).unwrap(),
        "? like lower(concat('%', this_.name, '%'))"
    );

    let ansi = user_query(sql_criteria::Ansi);
    assert_eq!(
        criterion.to_sql(&ansi).unwrap(),
        "? like lower(('%' || this_.name || '%'))"
    );

    for query in [postgres, mysql, ansi] {
        assert_eq!(
            criterion.bind_values(&query).unwrap(),
            vec![SqlValue::Text("ada".to_owned())]
        );
    }
}

#[test]
fn stored_masks_round_trip_and_match_their_criteria() {
    let codec = FlagSetCodec::<Role>::new();
    let set = FlagSet::of([Role::User, Role::Auditor]);

    let stored = codec.encode(Some(&set));
    assert_eq!(stored, SqlValue::Int64(0b101));
    assert_eq!(codec.decode(&stored).unwrap(), set);

    let query = user_query(sql_criteria::Ansi);
    assert_eq!(
        restrictions::all("flags", set).to_sql(&query).unwrap(),
        "(this_.flags & 5 > 0)"
    );
}

#[test]
fn grouped_reports_keep_grouping_columns_out_of_the_select_list() {
    let query = TableQuery::builder("this_")
        .property("dept", "dept")
        .property("city", "city")
        .build();

    let list = ProjectionList::new()
        .add(projection::group_only("dept"))
        .add(projection::property("city"));

    assert_eq!(list.select_sql(&query).unwrap(), "this_.city as y0_");
    assert_eq!(list.group_by_sql(&query).unwrap(), "this_.dept");
    assert!(list.is_grouped());
}

#[test]
fn composite_properties_repeat_the_bound_value() {
    let query = user_query(sql_criteria::Ansi);
    let criterion = restrictions::eq_value("amount", 10);
    assert_eq!(
        criterion.to_sql(&query).unwrap(),
        "(this_.amount_value = ? and this_.amount_currency = ?)"
    );
    assert_eq!(
        criterion.bind_values(&query).unwrap(),
        vec![SqlValue::Int64(10), SqlValue::Int64(10)]
    );
}
