// Room catalog: the bookable room templates and the informational areas

// A bookable room definition. Every booking starts out as a copy of one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomTemplate {
    pub name: &'static str,
    pub capacity: i32,
    pub room_number: i32,
}

// Named location with a number that shows up in the catalog but cannot be booked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    pub name: &'static str,
    pub room_number: i32,
}

pub const ROOM_COUNT: usize = 3;

pub static ROOM_TEMPLATES: [RoomTemplate; ROOM_COUNT] = [
    RoomTemplate {
        name: "Meetings",
        capacity: 20,
        room_number: 1,
    },
    RoomTemplate {
        name: "Lab",
        capacity: 10,
        room_number: 2,
    },
    RoomTemplate {
        name: "Workspace",
        capacity: 50,
        room_number: 3,
    },
];

pub static AREAS: [Area; 5] = [
    Area {
        name: "Stuff Area",
        room_number: 4,
    },
    Area {
        name: "Kitchen Area",
        room_number: 5,
    },
    Area {
        name: "Coffee Area",
        room_number: 6,
    },
    Area {
        name: "Break Area",
        room_number: 7,
    },
    Area {
        name: "Lean Back Area",
        room_number: 8,
    },
];

/// One line of the room options menu, with the 1-based index the operator types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomOption {
    pub selection: usize,
    pub template: &'static RoomTemplate,
}

/// Entry of the room-number catalog, either a template or an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub room_number: i32,
    pub bookable: bool,
}

pub fn room_options() -> impl Iterator<Item = RoomOption> {
    ROOM_TEMPLATES
        .iter()
        .enumerate()
        .map(|(i, template)| RoomOption {
            selection: i + 1,
            template,
        })
}

// Maps a 1-based menu selection onto an index into ROOM_TEMPLATES
pub fn template_index(selection: i64) -> Option<usize> {
    let index = usize::try_from(selection).ok()?.checked_sub(1)?;
    (index < ROOM_TEMPLATES.len()).then_some(index)
}

// Templates first, then areas
pub fn room_number_catalog() -> Vec<CatalogEntry> {
    ROOM_TEMPLATES
        .iter()
        .map(|t| CatalogEntry {
            name: t.name,
            room_number: t.room_number,
            bookable: true,
        })
        .chain(AREAS.iter().map(|a| CatalogEntry {
            name: a.name,
            room_number: a.room_number,
            bookable: false,
        }))
        .collect()
}
