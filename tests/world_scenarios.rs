//! End-to-end scenarios driving zones, exits and the player the way a
//! command dispatcher would.

use advworld::world::{Command, Item, Named, Player, World, Zone};

#[test]
fn hidden_locked_one_way_exit() {
    let mut world = World::new();
    let cave = world.add_zone(Zone::new("Cave", "Une cave sombre")).unwrap();
    let hall = world.add_zone(Zone::new("Hall", "Un grand hall")).unwrap();

    let zone = world.zone_mut(cave).unwrap();
    zone.put_exit(
        "N",
        advworld::world::Exit::custom(hall, true, Some("brass"), false, true),
    );
    assert_eq!(zone.exit_string(), "Sorties: aucune");

    zone.reveal_exit("N");
    assert_eq!(zone.exit_string(), "Sorties: nord");

    let wrong = Item::new("iron", "Une clé en fer", 1);
    let brass = Item::new("Brass", "Une clé en laiton", 1);
    assert!(!zone.unlock_exit("N", Some(&wrong)));
    assert!(zone.exit("N").unwrap().is_locked());
    assert!(zone.unlock_exit("N", Some(&brass)));
    assert!(zone.unlock_exit("N", None));
    assert!(zone.exit("N").unwrap().is_one_way());

    assert_eq!(world.destination(cave, "N"), Some(hall));
    // one-way: nothing leads back
    assert!(world.zone(hall).unwrap().exit("S").is_none());
}

#[test]
fn capacity_scenario() {
    let mut player = Player::with_capacity(10);
    let heavy = Item::new("Pelle", "Une pelle rouillée", 6);
    let medium = Item::new("Corde", "Une corde solide", 5);

    assert!(player.add_item(heavy));
    assert!(!player.add_item(medium.clone()));
    assert_eq!(player.current_weight(), 6);
    assert_eq!(player.inventory().len(), 1);

    assert!(player.remove_item("pelle").is_some());
    assert!(player.add_item(medium));
    assert_eq!(player.current_weight(), 5);
}

#[test]
fn pick_up_and_drop_moves_the_item() {
    let mut world = World::new();
    let jardin = world.add_zone(Zone::new("Jardin", "Un jardin")).unwrap();
    world
        .zone_mut(jardin)
        .unwrap()
        .add_item(Item::new("Brass", "Une clé en laiton", 1));
    let mut player = Player::new();

    let take = Command::new("prendre", Some("brass"));
    let name = take.second_word().unwrap();
    let zone = world.zone_mut(jardin).unwrap();
    let item = zone.remove_item(name).unwrap();
    assert!(player.add_item(item));
    assert!(zone.get_item(name).is_none());
    assert!(player.has_item(name));

    let drop = Command::new("poser", Some("BRASS"));
    let item = player.remove_item(drop.second_word().unwrap()).unwrap();
    zone.add_item(item);
    assert_eq!(zone.items_string(), "Brass");
    assert!(!player.has_item("brass"));
    assert_eq!(player.current_weight(), 0);
}

#[test]
fn too_heavy_item_stays_in_zone() {
    let mut zone = Zone::new("Cave", "Une cave");
    zone.add_item(Item::new("Tonneau", "Un tonneau", 12));
    let mut player = Player::new();

    let item = zone.remove_item("tonneau").unwrap();
    if let Err(item) = take_or_return(&mut player, item) {
        zone.add_item(item);
    }
    assert_eq!(zone.items().len(), 1);
    assert_eq!(zone.get_item("tonneau").unwrap().name(), "Tonneau");
    assert_eq!(player.inventory_string(), "Votre inventaire est vide.");
}

fn take_or_return(player: &mut Player, item: Item) -> Result<(), Item> {
    if item.weight() + player.current_weight() > player.capacity() {
        return Err(item);
    }
    assert!(player.add_item(item));
    Ok(())
}

#[test]
fn journal_tracks_visits_and_notes() {
    let mut player = Player::new();
    for zone in ["Entrée", "Hall", "Entrée", "Cave"] {
        player.visit_zone(zone);
    }
    assert_eq!(player.visited_zones(), ["Entrée", "Hall", "Cave"]);

    let note = Command::new("noter", Some("le")).with_args("le majordome ment");
    player.add_note(note.complete_args().unwrap());
    player.add_note(note.complete_args().unwrap());
    assert_eq!(player.notes().len(), 1);
    assert_eq!(player.notes_string(), "Vos notes:\n- le majordome ment\n");
}
