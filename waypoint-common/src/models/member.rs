//! Members and the directed relationships between them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{apply_optional, missing_fields_error, non_blank, patch, required_text};
use crate::geo::LatLng;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<LatLng>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub coordinates: Option<LatLng>,
    pub notes: Option<String>,
}

impl NewMember {
    pub fn named(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            ..Default::default()
        }
    }

    pub fn validate(self) -> Result<MemberDraft> {
        let mut missing = Vec::new();
        let first_name = required_text(self.first_name, "firstName", &mut missing);
        let last_name = required_text(self.last_name, "lastName", &mut missing);
        missing_fields_error(missing)?;

        Ok(MemberDraft {
            first_name,
            last_name,
            email: non_blank(self.email),
            phone: non_blank(self.phone),
            city: non_blank(self.city),
            country: non_blank(self.country),
            coordinates: self.coordinates.map(LatLng::normalized),
            notes: non_blank(self.notes),
        })
    }
}

impl MemberDraft {
    pub fn into_member(self, id: String, now: DateTime<Utc>) -> Member {
        Member {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            city: self.city,
            country: self.country,
            coordinates: self.coordinates,
            notes: self.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "patch::double_option", skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::double_option", skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::double_option", skip_serializing_if = "Option::is_none")]
    pub city: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::double_option", skip_serializing_if = "Option::is_none")]
    pub country: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::double_option", skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Option<LatLng>>,
    #[serde(default, deserialize_with = "patch::double_option", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

impl MemberPatch {
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if let Some(first) = &self.first_name {
            required_text(Some(first.clone()), "firstName", &mut missing);
        }
        if let Some(last) = &self.last_name {
            required_text(Some(last.clone()), "lastName", &mut missing);
        }
        missing_fields_error(missing)
    }

    pub fn touches_order(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some()
    }

    pub fn apply_to(&self, member: &mut Member, now: DateTime<Utc>) {
        if let Some(first) = &self.first_name {
            member.first_name = first.trim().to_string();
        }
        if let Some(last) = &self.last_name {
            member.last_name = last.trim().to_string();
        }
        apply_optional(&mut member.email, &self.email);
        apply_optional(&mut member.phone, &self.phone);
        apply_optional(&mut member.city, &self.city);
        apply_optional(&mut member.country, &self.country);
        if let Some(coordinates) = &self.coordinates {
            member.coordinates = coordinates.map(LatLng::normalized);
        }
        apply_optional(&mut member.notes, &self.notes);
        member.updated_at = now;
    }
}

/// Directed edge between two members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub id: String,
    pub from_member_id: String,
    pub to_member_id: String,
    #[serde(rename = "type")]
    pub relationship_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Relationship {
    /// Whether either endpoint is the given member
    pub fn involves(&self, member_id: &str) -> bool {
        self.from_member_id == member_id || self.to_member_id == member_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRelationship {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_member_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_member_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub relationship_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipDraft {
    pub from_member_id: String,
    pub to_member_id: String,
    pub relationship_type: String,
    pub description: Option<String>,
}

impl NewRelationship {
    pub fn between(from: &str, to: &str, relationship_type: &str) -> Self {
        Self {
            from_member_id: Some(from.to_string()),
            to_member_id: Some(to.to_string()),
            relationship_type: Some(relationship_type.to_string()),
            description: None,
        }
    }

    /// Check required fields and reject self-relationships
    pub fn validate(self) -> Result<RelationshipDraft> {
        let mut missing = Vec::new();
        let from_member_id = required_text(self.from_member_id, "fromMemberId", &mut missing);
        let to_member_id = required_text(self.to_member_id, "toMemberId", &mut missing);
        let relationship_type = required_text(self.relationship_type, "type", &mut missing);
        missing_fields_error(missing)?;

        if from_member_id == to_member_id {
            return Err(Error::Validation(
                "A member cannot have a relationship with themselves".to_string(),
            ));
        }

        Ok(RelationshipDraft {
            from_member_id,
            to_member_id,
            relationship_type,
            description: non_blank(self.description),
        })
    }
}

impl RelationshipDraft {
    pub fn into_relationship(self, id: String, now: DateTime<Utc>) -> Relationship {
        Relationship {
            id,
            from_member_id: self.from_member_id,
            to_member_id: self.to_member_id,
            relationship_type: self.relationship_type,
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of a relationship; endpoints are fixed once created
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipPatch {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub relationship_type: Option<String>,
    #[serde(default, deserialize_with = "patch::double_option", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

impl RelationshipPatch {
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if let Some(t) = &self.relationship_type {
            required_text(Some(t.clone()), "type", &mut missing);
        }
        missing_fields_error(missing)
    }

    pub fn apply_to(&self, relationship: &mut Relationship, now: DateTime<Utc>) {
        if let Some(t) = &self.relationship_type {
            relationship.relationship_type = t.trim().to_string();
        }
        apply_optional(&mut relationship.description, &self.description);
        relationship.updated_at = now;
    }
}

/// Members: ascending last name, then first name (case-insensitive), then id
pub fn member_order(a: &Member, b: &Member) -> Ordering {
    a.last_name
        .to_lowercase()
        .cmp(&b.last_name.to_lowercase())
        .then_with(|| a.first_name.to_lowercase().cmp(&b.first_name.to_lowercase()))
        .then_with(|| a.id.cmp(&b.id))
}

/// Relationships: most recently created first, then id
pub fn relationship_order(a: &Relationship, b: &Relationship) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| a.id.cmp(&b.id))
}

pub fn sort_members(members: &mut [Member]) {
    members.sort_by(member_order);
}

pub fn sort_relationships(relationships: &mut [Relationship]) {
    relationships.sort_by(relationship_order);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn member(id: &str, first: &str, last: &str) -> Member {
        NewMember::named(first, last)
            .validate()
            .unwrap()
            .into_member(id.into(), Utc::now())
    }

    #[test]
    fn test_new_member_requires_names() {
        let err = NewMember::default().validate().unwrap_err();
        assert!(err.to_string().contains("firstName, lastName"));
    }

    #[test]
    fn test_member_order_last_then_first() {
        let mut members = vec![
            member("1", "Zoe", "Adams"),
            member("2", "Ana", "baker"),
            member("3", "Al", "Adams"),
        ];
        sort_members(&mut members);
        let names: Vec<String> = members.iter().map(Member::full_name).collect();
        assert_eq!(names, vec!["Al Adams", "Zoe Adams", "Ana baker"]);
    }

    #[test]
    fn test_self_relationship_rejected() {
        let err = NewRelationship::between("m1", "m1", "colleague").validate().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_relationship_requires_type() {
        let input = NewRelationship {
            from_member_id: Some("a".into()),
            to_member_id: Some("b".into()),
            ..Default::default()
        };
        assert!(input.validate().unwrap_err().to_string().contains("type"));
    }

    #[test]
    fn test_relationship_order_newest_first() {
        let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mk = |id: &str, offset: i64| {
            NewRelationship::between("a", "b", "friend")
                .validate()
                .unwrap()
                .into_relationship(id.into(), base + Duration::minutes(offset))
        };
        let mut rels = vec![mk("old", 0), mk("new", 10), mk("mid", 5)];
        sort_relationships(&mut rels);
        let ids: Vec<&str> = rels.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_member_patch_null_notes_clears() {
        let mut m = member("1", "Ada", "Lovelace");
        m.notes = Some("Met in London".into());
        let now = Utc::now();

        let keep: MemberPatch = serde_json::from_str("{}").unwrap();
        keep.apply_to(&mut m, now);
        assert_eq!(m.notes.as_deref(), Some("Met in London"));

        let clear: MemberPatch = serde_json::from_str(r#"{"notes": null}"#).unwrap();
        clear.apply_to(&mut m, now);
        assert_eq!(m.notes, None);
    }

    #[test]
    fn test_relationship_type_wire_name() {
        let rel = NewRelationship::between("a", "b", "mentor")
            .validate()
            .unwrap()
            .into_relationship("r1".into(), Utc::now());
        let json = serde_json::to_value(&rel).unwrap();
        assert_eq!(json["type"], "mentor");
        assert_eq!(json["fromMemberId"], "a");
    }
}
