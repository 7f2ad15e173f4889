//! The fixed table of neuron parts shown in the detail list.
//!
//! Records are stored in a `'static` array in signal-flow order (dendrites
//! first, axon terminals last). Every accessor hands out references into that
//! array, so repeated calls observe the same records with the same
//! identifiers.
//!
//! # Example
//!
//! ```
//! # use neurograph_core::anatomy::{AnatomyDataset, anatomy_records};
//! let records = anatomy_records();
//! assert_eq!(records.len(), 7);
//! assert_eq!(records[0].name(), "Dendrites");
//!
//! let axon = AnatomyDataset.find_by_name("axon").unwrap();
//! assert_eq!(axon.id().index(), 3);
//! ```

use std::fmt;

use crate::color::SymbolicColor;

/// Stable identifier of an anatomy record, derived from its table index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartId(u8);

impl PartId {
    const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Returns the position of the record in the table.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "part-{}", self.0)
    }
}

/// A single anatomical part of a neuron.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnatomyRecord {
    id: PartId,
    icon: &'static str,
    name: &'static str,
    function: &'static str,
    analogy: &'static str,
    color: SymbolicColor,
}

impl AnatomyRecord {
    pub fn id(&self) -> PartId {
        self.id
    }

    /// Symbol name of the icon shown next to the record.
    pub fn icon(&self) -> &'static str {
        self.icon
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// What the part does.
    pub fn function(&self) -> &'static str {
        self.function
    }

    /// Everyday comparison for the part.
    pub fn analogy(&self) -> &'static str {
        self.analogy
    }

    pub fn color(&self) -> SymbolicColor {
        self.color
    }
}

static ANATOMY: [AnatomyRecord; 7] = [
    AnatomyRecord {
        id: PartId::new(0),
        icon: "tree.fill",
        name: "Dendrites",
        function: "Receive chemical signals from other neurons at connection points called synapses.",
        analogy: "The neuron's 'ears' or 'antennae'. 📡",
        color: SymbolicColor::Green,
    },
    AnatomyRecord {
        id: PartId::new(1),
        icon: "building.2.fill",
        name: "Soma (Cell Body)",
        function: "The neuron's headquarters. It contains the nucleus and processes incoming signals to determine if a signal should be fired.",
        analogy: "The neuron's 'command center'. 🏢",
        color: SymbolicColor::Orange,
    },
    AnatomyRecord {
        id: PartId::new(2),
        icon: "bolt.fill",
        name: "Axon Hillock",
        function: "The 'decision-making' region where the soma meets the axon. It sums up the total signals and fires an action potential if the threshold is met.",
        analogy: "The 'launch button' for the signal. 🚀",
        color: SymbolicColor::Purple,
    },
    AnatomyRecord {
        id: PartId::new(3),
        icon: "road.lanes",
        name: "Axon",
        function: "A long, cable-like projection that carries the electrical signal (action potential) away from the soma toward other neurons.",
        analogy: "The 'transmission cable'. 🛣️",
        color: SymbolicColor::Blue,
    },
    AnatomyRecord {
        id: PartId::new(4),
        icon: "shield.lefthalf.filled",
        name: "Myelin Sheath",
        function: "An insulating layer formed by glial cells that wraps around the axon, dramatically speeding up signal transmission.",
        analogy: "The rubber insulation on a wire. 🛡️",
        color: SymbolicColor::Cyan,
    },
    AnatomyRecord {
        id: PartId::new(5),
        icon: "arrow.left.and.right.righttriangle.left.righttriangle.right.fill",
        name: "Nodes of Ranvier",
        function: "Gaps in the myelin sheath where the action potential is regenerated, allowing the signal to 'jump' down the axon (saltatory conduction).",
        analogy: "Signal 'booster stations'. ⚡",
        color: SymbolicColor::Indigo,
    },
    AnatomyRecord {
        id: PartId::new(6),
        icon: "point.3.connected.trianglepath.dotted",
        name: "Axon Terminals",
        function: "The branched endings of an axon that transmit signals to other neurons by releasing neurotransmitters.",
        analogy: "The 'transmitters' or 'speakers'. 🔊",
        color: SymbolicColor::Pink,
    },
];

/// Returns every anatomy record in signal-flow order.
pub fn anatomy_records() -> &'static [AnatomyRecord] {
    &ANATOMY
}

/// Read-only view over the anatomy table.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnatomyDataset;

impl AnatomyDataset {
    /// Returns every record in signal-flow order.
    pub fn records(&self) -> &'static [AnatomyRecord] {
        anatomy_records()
    }

    pub fn iter(&self) -> std::slice::Iter<'static, AnatomyRecord> {
        anatomy_records().iter()
    }

    pub fn len(&self) -> usize {
        ANATOMY.len()
    }

    pub fn is_empty(&self) -> bool {
        ANATOMY.is_empty()
    }

    /// Looks up a record by its identifier.
    pub fn get(&self, id: PartId) -> Option<&'static AnatomyRecord> {
        anatomy_records().get(id.index())
    }

    /// Looks up a record by name, ignoring ASCII case.
    pub fn find_by_name(&self, name: &str) -> Option<&'static AnatomyRecord> {
        anatomy_records()
            .iter()
            .find(|record| record.name.eq_ignore_ascii_case(name))
    }
}

impl IntoIterator for AnatomyDataset {
    type Item = &'static AnatomyRecord;
    type IntoIter = std::slice::Iter<'static, AnatomyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
