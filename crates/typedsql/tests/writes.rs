mod common;

use common::{MockDb, TabPerson};
use typedsql::prelude::*;
use typedsql::{ContextConfig, IdentifierQuoting};

#[test]
fn insert_update_remove_report_affected_rows() {
    let p = TabPerson::default();
    let mut db = MockDb::new();
    db.affected = 3;

    let n = insert_into(p)
        .set((p.id().set(1), p.name().set("ann"), p.active().set(true)))
        .run(&mut db)
        .unwrap();
    assert_eq!(n, 3);

    update(p)
        .set(p.score().set(1.5))
        .where_(p.id().eq(1))
        .run(&mut db)
        .unwrap();
    remove_from(p).where_(p.active().not()).run(&mut db).unwrap();
    remove_from(p).unconditionally().run(&mut db).unwrap();

    assert_eq!(
        db.executed,
        [
            "INSERT INTO tab_person (id,name,active) VALUES(1,'ann',TRUE)",
            "UPDATE tab_person SET score=1.5 WHERE tab_person.id=1",
            "DELETE FROM tab_person WHERE NOT tab_person.active",
            "DELETE FROM tab_person",
        ]
    );
}

#[test]
fn trivial_values_become_null_where_declared() {
    let p = TabPerson::default();
    let mut db = MockDb::new();
    insert_into(p)
        .set((p.id().set(0), p.name().set(""), p.feature().set(tvin(0))))
        .run(&mut db)
        .unwrap();
    assert_eq!(
        db.last_sql(),
        "INSERT INTO tab_person (id,name,feature) VALUES(0,NULL,NULL)"
    );

    update(p)
        .set((p.feature().set(tvin(4)), p.name().set_null()))
        .unconditionally()
        .run(&mut db)
        .unwrap();
    assert_eq!(db.last_sql(), "UPDATE tab_person SET feature=4,name=NULL");
}

#[test]
fn dialect_comes_from_the_connector() {
    let p = TabPerson::default();
    let mut db = MockDb::new();
    db.config = ContextConfig::new().with_identifier_quoting(IdentifierQuoting::DoubleQuote);
    update(p)
        .set(p.name().append("!"))
        .where_(p.id().eq(2))
        .run(&mut db)
        .unwrap();
    assert_eq!(
        db.last_sql(),
        r#"UPDATE "tab_person" SET "name"="tab_person"."name"||'!' WHERE "tab_person"."id"=2"#
    );

    insert_into(p).default_values().run(&mut db).unwrap();
    assert_eq!(db.last_sql(), r#"INSERT INTO "tab_person" DEFAULT VALUES"#);
}

#[test]
fn write_errors_pass_through() {
    let p = TabPerson::default();
    let mut db = MockDb::new();
    db.fail_next("disk full");
    let err = insert_into(p).set(p.id().set(1)).run(&mut db).unwrap_err();
    assert_eq!(err.to_string(), "mock failure: disk full");
}
