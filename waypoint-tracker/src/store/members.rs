//! Members and relationships store
//!
//! Both collections live under one storage key so they are always replaced
//! together.

use std::sync::Arc;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::info;
use waypoint_common::models::member::{sort_members, sort_relationships};
use waypoint_common::models::{
    Member, MemberPatch, NewMember, NewRelationship, Relationship, RelationshipPatch,
};
use waypoint_common::{ids, time, Error, Result};

use super::storage::{LocalStorage, MEMBERS_KEY};
use super::{load_document, save_document, ChangeFeed, ChangeKind, Domain};

/// Launch-URL query parameter requesting a one-shot reset of local members
pub const RESET_MEMBERS_PARAM: &str = "resetMembers";

/// Persisted shape of the members namespace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MembersState {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

pub struct MemberStore {
    storage: Arc<dyn LocalStorage>,
    feed: ChangeFeed,
    state: MembersState,
}

impl MemberStore {
    pub fn open(storage: Arc<dyn LocalStorage>, feed: ChangeFeed) -> Result<Self> {
        let mut state: MembersState = load_document(storage.as_ref(), MEMBERS_KEY)?;
        sort_members(&mut state.members);
        sort_relationships(&mut state.relationships);
        Ok(Self {
            storage,
            feed,
            state,
        })
    }

    /// Members ordered by last name, then first name
    pub fn members(&self) -> &[Member] {
        &self.state.members
    }

    /// Relationships, most recently created first
    pub fn relationships(&self) -> &[Relationship] {
        &self.state.relationships
    }

    pub fn member(&self, id: &str) -> Option<&Member> {
        self.state.members.iter().find(|m| m.id == id)
    }

    pub fn relationships_of(&self, member_id: &str) -> Vec<&Relationship> {
        self.state
            .relationships
            .iter()
            .filter(|r| r.involves(member_id))
            .collect()
    }

    pub fn create_member(&mut self, input: NewMember) -> Result<Member> {
        let member = input.validate()?.into_member(ids::generate("mbr"), time::now());
        let mut next = self.state.clone();
        next.members.push(member.clone());
        sort_members(&mut next.members);
        self.commit(next)?;
        Ok(member)
    }

    pub fn update_member(&mut self, id: &str, patch: &MemberPatch) -> Result<Option<Member>> {
        patch.validate()?;
        let mut next = self.state.clone();
        let Some(member) = next.members.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        patch.apply_to(member, time::now());
        let updated = member.clone();
        if patch.touches_order() {
            sort_members(&mut next.members);
        }
        self.commit(next)?;
        Ok(Some(updated))
    }

    /// Remove a member together with every relationship touching it
    pub fn delete_member(&mut self, id: &str) -> Result<bool> {
        if self.member(id).is_none() {
            return Ok(false);
        }
        let mut next = self.state.clone();
        next.members.retain(|m| m.id != id);
        next.relationships.retain(|r| !r.involves(id));
        self.commit(next)?;
        Ok(true)
    }

    /// Link two existing, distinct members
    pub fn create_relationship(&mut self, input: NewRelationship) -> Result<Relationship> {
        let draft = input.validate()?;
        for member_id in [&draft.from_member_id, &draft.to_member_id] {
            if self.member(member_id).is_none() {
                return Err(Error::Validation(format!("Unknown member: {}", member_id)));
            }
        }

        let relationship = draft.into_relationship(ids::generate("rel"), time::now());
        let mut next = self.state.clone();
        next.relationships.push(relationship.clone());
        sort_relationships(&mut next.relationships);
        self.commit(next)?;
        Ok(relationship)
    }

    pub fn update_relationship(
        &mut self,
        id: &str,
        patch: &RelationshipPatch,
    ) -> Result<Option<Relationship>> {
        patch.validate()?;
        let mut next = self.state.clone();
        let Some(relationship) = next.relationships.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        patch.apply_to(relationship, time::now());
        let updated = relationship.clone();
        self.commit(next)?;
        Ok(Some(updated))
    }

    pub fn delete_relationship(&mut self, id: &str) -> Result<bool> {
        if !self.state.relationships.iter().any(|r| r.id == id) {
            return Ok(false);
        }
        let mut next = self.state.clone();
        next.relationships.retain(|r| r.id != id);
        self.commit(next)?;
        Ok(true)
    }

    /// Replace both collections at once with fetched data
    pub fn replace_all(
        &mut self,
        mut members: Vec<Member>,
        mut relationships: Vec<Relationship>,
    ) -> Result<()> {
        sort_members(&mut members);
        sort_relationships(&mut relationships);
        let state = MembersState {
            members,
            relationships,
        };
        save_document(self.storage.as_ref(), MEMBERS_KEY, &state)?;
        self.state = state;
        self.feed.emit(Domain::Members, ChangeKind::Hydrated);
        Ok(())
    }

    /// Clear the local members namespace, in memory and on disk
    pub fn reset(&mut self) -> Result<()> {
        self.storage.remove(MEMBERS_KEY)?;
        self.state = MembersState::default();
        info!("Cleared local members state");
        self.feed.emit(Domain::Members, ChangeKind::Reset);
        Ok(())
    }

    /// Persist `next`, then make it current; a failed save changes nothing
    fn commit(&mut self, next: MembersState) -> Result<()> {
        save_document(self.storage.as_ref(), MEMBERS_KEY, &next)?;
        self.state = next;
        self.feed.emit(Domain::Members, ChangeKind::Mutated);
        Ok(())
    }
}

/// Consume the members-reset signal from a launch URL
///
/// Returns whether the parameter was present and removes it from the URL,
/// keeping every other query pair in order.
pub fn take_reset_signal(url: &mut Url) -> bool {
    let mut found = false;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| {
            let is_signal = key == RESET_MEMBERS_PARAM;
            found |= is_signal;
            !is_signal
        })
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    if !found {
        return false;
    }
    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;
    use std::time::Duration;

    fn store() -> (MemberStore, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let store = MemberStore::open(storage.clone(), ChangeFeed::default()).unwrap();
        (store, storage)
    }

    #[test]
    fn test_members_sorted_by_last_then_first() {
        let (mut store, _) = store();
        store.create_member(NewMember::named("Zoe", "Adams")).unwrap();
        store.create_member(NewMember::named("bob", "baker")).unwrap();
        store.create_member(NewMember::named("Ann", "Adams")).unwrap();

        let names: Vec<String> = store.members().iter().map(|m| m.full_name()).collect();
        assert_eq!(names, vec!["Ann Adams", "Zoe Adams", "bob baker"]);
    }

    #[test]
    fn test_self_relationship_rejected() {
        let (mut store, _) = store();
        let ada = store.create_member(NewMember::named("Ada", "Lovelace")).unwrap();
        let err = store
            .create_relationship(NewRelationship::between(&ada.id, &ada.id, "friend"))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.relationships().is_empty());
    }

    #[test]
    fn test_colleague_relationships_listed_newest_first() {
        let (mut store, _) = store();
        let ada = store.create_member(NewMember::named("Ada", "Lovelace")).unwrap();
        let charles = store.create_member(NewMember::named("Charles", "Babbage")).unwrap();
        let mary = store.create_member(NewMember::named("Mary", "Somerville")).unwrap();

        let first = store
            .create_relationship(NewRelationship::between(&ada.id, &charles.id, "colleague"))
            .unwrap();
        std::thread::sleep(Duration::from_millis(5));
        let second = store
            .create_relationship(NewRelationship::between(&mary.id, &ada.id, "colleague"))
            .unwrap();

        let ids: Vec<&str> = store.relationships().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);
        assert_eq!(store.relationships_of(&ada.id).len(), 2);
    }

    #[test]
    fn test_relationship_requires_known_members() {
        let (mut store, _) = store();
        let ada = store.create_member(NewMember::named("Ada", "Lovelace")).unwrap();
        let err = store
            .create_relationship(NewRelationship::between(&ada.id, "ghost", "friend"))
            .unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_delete_member_drops_its_relationships() {
        let (mut store, _) = store();
        let ada = store.create_member(NewMember::named("Ada", "Lovelace")).unwrap();
        let charles = store.create_member(NewMember::named("Charles", "Babbage")).unwrap();
        store
            .create_relationship(NewRelationship::between(&ada.id, &charles.id, "colleague"))
            .unwrap();

        assert!(store.delete_member(&charles.id).unwrap());
        assert!(store.relationships().is_empty());
        assert!(!store.delete_member(&charles.id).unwrap());
    }

    #[test]
    fn test_update_member_notes_null_vs_absent() {
        let (mut store, _) = store();
        let mut input = NewMember::named("Grace", "Hopper");
        input.notes = Some("Met at the conference".into());
        let grace = store.create_member(input).unwrap();

        let absent: MemberPatch = serde_json::from_str(r#"{"city": "Arlington"}"#).unwrap();
        let updated = store.update_member(&grace.id, &absent).unwrap().unwrap();
        assert_eq!(updated.notes.as_deref(), Some("Met at the conference"));
        assert_eq!(updated.city.as_deref(), Some("Arlington"));

        let clear: MemberPatch = serde_json::from_str(r#"{"notes": null}"#).unwrap();
        let updated = store.update_member(&grace.id, &clear).unwrap().unwrap();
        assert_eq!(updated.notes, None);
    }

    #[test]
    fn test_failed_save_leaves_members_unchanged() {
        let (mut store, storage) = store();
        let ada = store.create_member(NewMember::named("Ada", "Lovelace")).unwrap();
        let charles = store.create_member(NewMember::named("Charles", "Babbage")).unwrap();
        let link = store
            .create_relationship(NewRelationship::between(&ada.id, &charles.id, "colleague"))
            .unwrap();
        let before = store.state.clone();

        storage.refuse_writes(true);
        assert!(store.create_member(NewMember::named("Mary", "Somerville")).is_err());
        let rename: MemberPatch = serde_json::from_str(r#"{"lastName": "King"}"#).unwrap();
        assert!(store.update_member(&ada.id, &rename).is_err());
        assert!(store.delete_member(&charles.id).is_err());
        assert!(store
            .create_relationship(NewRelationship::between(&charles.id, &ada.id, "mentor"))
            .is_err());
        let retype: RelationshipPatch = serde_json::from_str(r#"{"type": "friend"}"#).unwrap();
        assert!(store.update_relationship(&link.id, &retype).is_err());
        assert!(store.delete_relationship(&link.id).is_err());

        assert_eq!(store.state, before);

        storage.refuse_writes(false);
        store.create_member(NewMember::named("Grace", "Hopper")).unwrap();
        let reopened = MemberStore::open(storage, ChangeFeed::default()).unwrap();
        let names: Vec<String> = reopened.members().iter().map(|m| m.full_name()).collect();
        assert_eq!(names, vec!["Charles Babbage", "Grace Hopper", "Ada Lovelace"]);
        assert_eq!(reopened.relationships().len(), 1);
    }

    #[test]
    fn test_reset_clears_namespace() {
        let (mut store, storage) = store();
        store.create_member(NewMember::named("Ada", "Lovelace")).unwrap();
        assert!(storage.load(MEMBERS_KEY).unwrap().is_some());

        store.reset().unwrap();
        assert!(store.members().is_empty());
        assert_eq!(storage.load(MEMBERS_KEY).unwrap(), None);
    }

    #[test]
    fn test_take_reset_signal_scrubs_parameter() {
        let mut url = Url::parse("http://localhost:3000/members?view=grid&resetMembers=true&page=2").unwrap();
        assert!(take_reset_signal(&mut url));
        assert_eq!(url.as_str(), "http://localhost:3000/members?view=grid&page=2");

        // One-shot: a second read finds nothing
        assert!(!take_reset_signal(&mut url));
    }

    #[test]
    fn test_take_reset_signal_drops_empty_query() {
        let mut url = Url::parse("http://localhost:3000/?resetMembers=1").unwrap();
        assert!(take_reset_signal(&mut url));
        assert_eq!(url.as_str(), "http://localhost:3000/");

        let mut plain = Url::parse("http://localhost:3000/members").unwrap();
        assert!(!take_reset_signal(&mut plain));
        assert_eq!(plain.as_str(), "http://localhost:3000/members");
    }
}
