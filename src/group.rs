use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::geometry::{BBoxCorners, Corner};
use crate::primitive::ItemId;

/// Identifier of a shape group; named after its content primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(ItemId);

impl GroupId {
    pub fn new(content: ItemId) -> Self {
        Self(content)
    }

    pub fn content(&self) -> ItemId {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group_{}", self.0)
    }
}

/// Role an item plays inside its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Member {
    Content,
    BoundingBox,
    Handle(Corner),
}

/// A logical shape: one content primitive, its (normally hidden) bounding box
/// rectangle and four corner handles, created and destroyed together.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    id: GroupId,
    content: ItemId,
    bbox: ItemId,
    /// handles[i] sits on corners[i]
    handles: [ItemId; 4],
    corners: BBoxCorners,
}

impl Group {
    pub fn new(content: ItemId, bbox: ItemId, handles: [ItemId; 4], corners: BBoxCorners) -> Self {
        Self {
            id: GroupId::new(content),
            content,
            bbox,
            handles,
            corners,
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn content(&self) -> ItemId {
        self.content
    }

    pub fn bbox(&self) -> ItemId {
        self.bbox
    }

    pub fn handles(&self) -> [ItemId; 4] {
        self.handles
    }

    pub fn handle(&self, corner: Corner) -> ItemId {
        self.handles[corner.index()]
    }

    pub fn corners(&self) -> &BBoxCorners {
        &self.corners
    }

    pub fn corners_mut(&mut self) -> &mut BBoxCorners {
        &mut self.corners
    }

    pub fn set_corners(&mut self, corners: BBoxCorners) {
        self.corners = corners;
    }

    /// Content, bbox, then handles clockwise from top-left.
    pub fn members(&self) -> impl Iterator<Item = (ItemId, Member)> + '_ {
        [
            (self.content, Member::Content),
            (self.bbox, Member::BoundingBox),
        ]
        .into_iter()
        .chain(
            Corner::ALL
                .into_iter()
                .map(|corner| (self.handle(corner), Member::Handle(corner))),
        )
    }

    pub fn item_ids(&self) -> Vec<ItemId> {
        self.members().map(|(id, _)| id).collect()
    }
}

/// All live groups, plus a reverse index from member item to group.
#[derive(Debug, Default)]
pub struct GroupRegistry {
    groups: BTreeMap<GroupId, Group>,
    members: HashMap<ItemId, (GroupId, Member)>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, group: Group) -> GroupId {
        let id = group.id();
        for (item, member) in group.members() {
            self.members.insert(item, (id, member));
        }
        self.groups.insert(id, group);
        id
    }

    pub fn remove(&mut self, id: GroupId) -> Option<Group> {
        let group = self.groups.remove(&id)?;
        for item in group.item_ids() {
            self.members.remove(&item);
        }
        Some(group)
    }

    pub fn get(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(&id)
    }

    pub fn get_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.groups.get_mut(&id)
    }

    pub fn contains(&self, id: GroupId) -> bool {
        self.groups.contains_key(&id)
    }

    /// Group owning `item`, if any.
    pub fn group_of(&self, item: ItemId) -> Option<GroupId> {
        self.members.get(&item).map(|(id, _)| *id)
    }

    pub fn member_of(&self, item: ItemId) -> Option<(GroupId, Member)> {
        self.members.get(&item).copied()
    }

    /// True for bounding boxes and handles: items that exist only to
    /// visualize a group.
    pub fn is_bookkeeping(&self, item: ItemId) -> bool {
        matches!(
            self.members.get(&item),
            Some((_, Member::BoundingBox | Member::Handle(_)))
        )
    }

    pub fn corners(&self, id: GroupId) -> Option<&BBoxCorners> {
        self.groups.get(&id).map(Group::corners)
    }

    pub fn handles(&self, id: GroupId) -> Option<[ItemId; 4]> {
        self.groups.get(&id).map(Group::handles)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    pub fn ids(&self) -> Vec<GroupId> {
        self.groups.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn clear(&mut self) {
        self.groups.clear();
        self.members.clear();
    }
}
