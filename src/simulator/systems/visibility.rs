use crate::simulator::{
    components::{
        edges::Connects,
        nodes::{Hidden, NodeKind},
    },
    ressources::simulator_vars::KindFilter,
};
use specs::{Entities, Join, Read, ReadStorage, System, WriteStorage};

/// Refreshes the [`Hidden`] markers from the current [`KindFilter`].
///
/// Nodes are hidden when their type is not allowed, edges when either
/// endpoint is hidden. Not part of the tick dispatcher; the simulator runs it
/// whenever the filter or the dataset changes.
pub struct ApplyVisibility;

impl<'a> System<'a> for ApplyVisibility {
    type SystemData = (
        Entities<'a>,
        ReadStorage<'a, NodeKind>,
        ReadStorage<'a, Connects>,
        WriteStorage<'a, Hidden>,
        Read<'a, KindFilter>,
    );

    fn run(&mut self, (entities, kinds, connections, mut hidden, filter): Self::SystemData) {
        for (entity, kind) in (&*entities, &kinds).join() {
            if filter.allows(&kind.0) {
                hidden.remove(entity);
            } else {
                let _ = hidden.insert(entity, Hidden);
            }
        }

        let edges: Vec<_> = (&*entities, &connections)
            .join()
            .map(|(entity, connects)| {
                let hide = hidden.contains(connects.src) || hidden.contains(connects.target);
                (entity, hide)
            })
            .collect();
        for (entity, hide) in edges {
            if hide {
                let _ = hidden.insert(entity, Hidden);
            } else {
                hidden.remove(entity);
            }
        }
    }
}
