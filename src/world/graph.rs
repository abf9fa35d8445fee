//! Arena holding every zone of a world.
//!
//! Zones are addressed by [`ZoneId`]; exits carry ids rather than references
//! so cycles in the map never become ownership cycles.

use log::{debug, info, warn};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use super::errors::WorldError;
use super::exit::{Exit, ZoneId};
use super::types::opposite_direction;
use super::zone::Zone;

#[derive(Debug, Clone, Default)]
pub struct World {
    zones: Vec<Zone>,
    by_name: HashMap<String, ZoneId>, // lowercase name -> id
}

/// An exit whose destination id is not part of the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingExit {
    pub from: ZoneId,
    pub direction: String,
    pub destination: ZoneId,
}

/// Something wrong with a world's map, as reported by [`World::problems`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldProblem {
    /// No path at all, hidden exits included, leads from the start zone.
    Unreachable { zone: String },
    /// Locked with no key name, so only a scripted `set_locked` opens it.
    KeylessLock { zone: String, direction: String },
    Dangling(DanglingExit),
}

impl fmt::Display for WorldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldProblem::Unreachable { zone } => write!(f, "{} is unreachable", zone),
            WorldProblem::KeylessLock { zone, direction } => {
                write!(f, "{} exit {} is locked and has no key", zone, direction)
            }
            WorldProblem::Dangling(d) => write!(
                f,
                "exit {} of {:?} points at missing {:?}",
                d.direction, d.from, d.destination
            ),
        }
    }
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_zone(&mut self, zone: Zone) -> Result<ZoneId, WorldError> {
        let key = zone.name().to_lowercase();
        if self.by_name.contains_key(&key) {
            return Err(WorldError::DuplicateZone(zone.name().to_string()));
        }

        let id = ZoneId(self.zones.len());
        debug!("Zone {} registered as {:?}", zone.name(), id);
        self.by_name.insert(key, id);
        self.zones.push(zone);
        Ok(id)
    }

    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(id.0)
    }

    pub fn zone_mut(&mut self, id: ZoneId) -> Option<&mut Zone> {
        self.zones.get_mut(id.0)
    }

    /// Id of the zone called `name`, ignoring case.
    pub fn find(&self, name: &str) -> Option<ZoneId> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    pub fn zone_by_name(&self, name: &str) -> Option<&Zone> {
        self.find(name).and_then(|id| self.zone(id))
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ZoneId, &Zone)> {
        self.zones.iter().enumerate().map(|(i, z)| (ZoneId(i), z))
    }

    /// Plain exit from `from` to `to`, plus the return exit when `direction`
    /// has an opposite.
    ///
    /// Both ends overwrite: an exit `to` already had in the opposite
    /// direction (locked, hidden or leading elsewhere) is replaced by a plain
    /// one back to `from`, and the replacement is logged at debug level.
    pub fn link(&mut self, from: ZoneId, direction: &str, to: ZoneId) -> Result<(), WorldError> {
        self.ensure(from)?;
        self.ensure(to)?;

        if let Some(zone) = self.zone_mut(from) {
            zone.set_exit(direction, to);
        }
        if let Some(back) = opposite_direction(direction) {
            if let Some(zone) = self.zone_mut(to) {
                if let Some(old) = zone.exit(back) {
                    debug!(
                        "Link {:?} -{}-> {:?} replaces return exit {} to {:?}",
                        from,
                        direction,
                        to,
                        back,
                        old.destination()
                    );
                }
                zone.set_exit(back, from);
            }
        }
        debug!("Linked {:?} -{}-> {:?}", from, direction, to);
        Ok(())
    }

    /// Where the exit in `direction` leads, provided the player could walk
    /// through it right now (it exists, is visible and is unlocked).
    pub fn destination(&self, from: ZoneId, direction: &str) -> Option<ZoneId> {
        let exit = self.zone(from)?.exit(direction)?;
        if exit.is_visible() && !exit.is_locked() {
            Some(exit.destination())
        } else {
            None
        }
    }

    /// Zones reachable from `start` through visible exits, in breadth-first
    /// order, `start` included. Locks are ignored since keys may turn up.
    pub fn reachable_from(&self, start: ZoneId) -> Vec<ZoneId> {
        self.walk(start, |exit| exit.is_visible())
    }

    /// Like [`World::reachable_from`] but also follows hidden exits.
    pub fn connected_from(&self, start: ZoneId) -> Vec<ZoneId> {
        self.walk(start, |_| true)
    }

    fn walk(&self, start: ZoneId, follow: impl Fn(&Exit) -> bool) -> Vec<ZoneId> {
        if self.zone(start).is_none() {
            return Vec::new();
        }

        let mut seen = HashSet::from([start]);
        let mut order = vec![start];
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            let Some(zone) = self.zone(current) else {
                continue;
            };
            for (_, exit) in zone.exits() {
                let next = exit.destination();
                if follow(exit) && self.zone(next).is_some() && seen.insert(next) {
                    order.push(next);
                    queue.push_back(next);
                }
            }
        }
        order
    }

    pub fn dangling_exits(&self) -> Vec<DanglingExit> {
        let mut dangling = Vec::new();
        for (id, zone) in self.iter() {
            for (dir, exit) in zone.exits() {
                if self.zone(exit.destination()).is_none() {
                    dangling.push(DanglingExit {
                        from: id,
                        direction: dir.to_string(),
                        destination: exit.destination(),
                    });
                }
            }
        }
        dangling
    }

    /// Map problems seen from `start`: zones no exit path reaches, keyless
    /// locks and dangling exits. Zones reachable only through hidden exits
    /// are fine and only logged.
    pub fn problems(&self, start: ZoneId) -> Result<Vec<WorldProblem>, WorldError> {
        self.ensure(start)?;

        let mut problems = Vec::new();
        let visible = self.reachable_from(start);
        let connected = self.connected_from(start);
        for (id, zone) in self.iter() {
            if !connected.contains(&id) {
                warn!("Zone {} cannot be reached from {:?}", zone.name(), start);
                problems.push(WorldProblem::Unreachable {
                    zone: zone.name().to_string(),
                });
            } else if !visible.contains(&id) {
                info!("Zone {} is only reachable through hidden exits", zone.name());
            }
            for (direction, exit) in zone.exits() {
                if exit.is_locked() && exit.key_name().is_none() {
                    problems.push(WorldProblem::KeylessLock {
                        zone: zone.name().to_string(),
                        direction: direction.to_string(),
                    });
                }
            }
        }
        problems.extend(self.dangling_exits().into_iter().map(WorldProblem::Dangling));
        Ok(problems)
    }

    fn ensure(&self, id: ZoneId) -> Result<(), WorldError> {
        if self.zone(id).is_some() {
            Ok(())
        } else {
            Err(WorldError::UnknownZone(format!("{:?}", id)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_rooms() -> (World, ZoneId, ZoneId, ZoneId) {
        let mut world = World::new();
        let cave = world.add_zone(Zone::new("Cave", "Une cave sombre")).unwrap();
        let hall = world.add_zone(Zone::new("Hall", "Un grand hall")).unwrap();
        let tour = world.add_zone(Zone::new("Tour", "Une tour en ruine")).unwrap();
        (world, cave, hall, tour)
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let (mut world, ..) = three_rooms();
        let err = world.add_zone(Zone::new("CAVE", "Encore une cave")).unwrap_err();
        assert!(matches!(err, WorldError::DuplicateZone(name) if name == "CAVE"));
        assert_eq!(world.len(), 3);
    }

    #[test]
    fn find_ignores_case() {
        let (world, cave, ..) = three_rooms();
        assert_eq!(world.find("cave"), Some(cave));
        assert_eq!(world.zone_by_name("CAVE").unwrap().name(), "Cave");
        assert_eq!(world.find("grotte"), None);
    }

    #[test]
    fn link_creates_return_exit() {
        let (mut world, cave, hall, tour) = three_rooms();
        world.link(cave, "N", hall).unwrap();
        world.link(hall, "portail", tour).unwrap();

        assert_eq!(world.destination(cave, "N"), Some(hall));
        assert_eq!(world.destination(hall, "S"), Some(cave));
        assert_eq!(world.destination(hall, "portail"), Some(tour));
        assert!(world.zone(tour).unwrap().exit_directions().is_empty());
        assert!(world.link(cave, "E", ZoneId(42)).is_err());
    }

    #[test]
    fn destination_respects_lock_and_visibility() {
        let (mut world, cave, hall, tour) = three_rooms();
        let zone = world.zone_mut(cave).unwrap();
        zone.set_special_exit("N", hall, true, Some("brass"), true);
        zone.set_special_exit("E", tour, false, None, false);

        assert_eq!(world.destination(cave, "N"), None);
        assert_eq!(world.destination(cave, "E"), None);
        assert_eq!(world.destination(cave, "O"), None);

        world.zone_mut(cave).unwrap().reveal_exit("E");
        assert_eq!(world.destination(cave, "E"), Some(tour));
    }

    #[test]
    fn reachability_follows_visible_exits() {
        let (mut world, cave, hall, tour) = three_rooms();
        world.zone_mut(cave).unwrap().set_special_exit("N", hall, true, Some("brass"), true);
        world.zone_mut(hall).unwrap().set_special_exit("E", tour, false, None, false);

        assert_eq!(world.reachable_from(cave), vec![cave, hall]);
        assert_eq!(world.connected_from(cave), vec![cave, hall, tour]);
        world.zone_mut(hall).unwrap().reveal_exit("E");
        assert_eq!(world.reachable_from(cave), vec![cave, hall, tour]);
        assert!(world.reachable_from(ZoneId(9)).is_empty());
    }

    #[test]
    fn link_replaces_existing_return_exit() {
        let (mut world, cave, hall, tour) = three_rooms();
        world.zone_mut(hall).unwrap().set_special_exit("S", tour, true, Some("brass"), false);
        world.link(cave, "N", hall).unwrap();

        let back = world.zone(hall).unwrap().exit("S").unwrap();
        assert_eq!(back.destination(), cave);
        assert!(!back.is_locked());
        assert!(back.is_visible());
        assert_eq!(world.destination(hall, "S"), Some(cave));
    }

    #[test]
    fn problems_on_a_clean_map() {
        let (mut world, cave, hall, tour) = three_rooms();
        world.link(cave, "N", hall).unwrap();
        // tour only behind a hidden one-way exit
        world.zone_mut(hall).unwrap().set_special_exit("E", tour, false, None, false);
        assert_eq!(world.problems(cave).unwrap(), Vec::new());
    }

    #[test]
    fn problems_report_unreachable_zone() {
        let (mut world, cave, hall, _) = three_rooms();
        world.link(cave, "N", hall).unwrap();
        let problems = world.problems(cave).unwrap();
        assert_eq!(
            problems,
            vec![WorldProblem::Unreachable {
                zone: "Tour".to_string()
            }]
        );
        assert_eq!(problems[0].to_string(), "Tour is unreachable");
    }

    #[test]
    fn problems_report_keyless_lock_and_dangling_exit() {
        let (mut world, cave, hall, tour) = three_rooms();
        world.link(cave, "N", hall).unwrap();
        world.link(hall, "E", tour).unwrap();
        world.zone_mut(tour).unwrap().set_special_exit("H", cave, true, None, true);
        world.zone_mut(cave).unwrap().set_one_way_exit("B", ZoneId(7));

        let problems = world.problems(cave).unwrap();
        assert_eq!(
            problems,
            vec![
                WorldProblem::KeylessLock {
                    zone: "Tour".to_string(),
                    direction: "H".to_string(),
                },
                WorldProblem::Dangling(DanglingExit {
                    from: cave,
                    direction: "B".to_string(),
                    destination: ZoneId(7),
                }),
            ]
        );
        assert_eq!(problems[0].to_string(), "Tour exit H is locked and has no key");
    }

    #[test]
    fn problems_need_a_known_start() {
        let (world, ..) = three_rooms();
        assert!(matches!(
            world.problems(ZoneId(9)),
            Err(WorldError::UnknownZone(_))
        ));
    }

    #[test]
    fn dangling_exits_are_reported() {
        let (mut world, cave, ..) = three_rooms();
        world.zone_mut(cave).unwrap().set_one_way_exit("B", ZoneId(7));
        let dangling = world.dangling_exits();
        assert_eq!(
            dangling,
            vec![DanglingExit {
                from: cave,
                direction: "B".to_string(),
                destination: ZoneId(7),
            }]
        );
    }
}
