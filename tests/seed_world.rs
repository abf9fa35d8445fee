//! Loading worlds from JSON seed files on disk, including the bundled seed.

use advworld::world::{load_world_from_json, Named, WorldError};
use std::fs;
use tempfile::TempDir;

#[test]
fn bundled_seed_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/seeds/world.json");
    let world = load_world_from_json(path).unwrap();
    assert_eq!(world.len(), 6);

    let entree = world.find("entrée").unwrap();
    let hall = world.find("hall").unwrap();
    let cave = world.find("cave").unwrap();
    let crypte = world.find("crypte").unwrap();

    // every zone is connected to the start, the crypt only through a secret
    assert_eq!(world.connected_from(entree).len(), world.len());
    assert!(!world.reachable_from(entree).contains(&crypte));
    assert!(world.dangling_exits().is_empty());
    assert!(world.problems(entree).unwrap().is_empty());

    assert_eq!(world.destination(hall, "B"), None);
    let hall_zone = world.zone(hall).unwrap();
    assert_eq!(hall_zone.exit("B").unwrap().key_name(), Some("brass"));
    assert_eq!(hall_zone.exit_string(), "Sorties: bas haut sud");

    let cave_zone = world.zone(cave).unwrap();
    assert_eq!(cave_zone.exit_string(), "Sorties: haut");

    let grenier = world.zone_by_name("Grenier").unwrap();
    let malle = grenier.get_container("malle").unwrap();
    assert_eq!(malle.items[0].name(), "Carnet");
}

#[test]
fn seed_from_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mini.json");
    fs::write(
        &path,
        r#"[
            { "name": "A", "exits": [{ "direction": "E", "to": "B" }] },
            { "name": "B", "exits": [{ "direction": "O", "to": "A" }] }
        ]"#,
    )
    .unwrap();

    let world = load_world_from_json(&path).unwrap();
    let a = world.find("a").unwrap();
    let b = world.find("b").unwrap();
    assert_eq!(world.destination(a, "E"), Some(b));
    assert_eq!(world.destination(b, "O"), Some(a));
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_world_from_json(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, WorldError::Io(_)));
}
