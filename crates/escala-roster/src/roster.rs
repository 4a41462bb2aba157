//! Roster provider trait and the in-memory roster editor.
//!
//! Scheduling functions read members through [`RosterProvider`], which only
//! has to hand out an ordered slice.  [`Roster`] is the editing side: it
//! validates names and ids, keeps members sorted by name, and replaces a
//! member wholesale on update.

use escala_core::errors::{Error, Result};
use escala_time::{Date, YearMonth};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::member::{MemberId, TeamMember};
use crate::month_summary::{month_summary, MonthSummary};
use crate::partition::{partition, DailyRoster};
use crate::vacation::{upcoming_vacations, UpcomingVacation};

/// A read-only, ordered collection of team members.
pub trait RosterProvider {
    /// The members, in roster order.
    fn members(&self) -> &[TeamMember];

    /// Partition the roster for `day`.
    fn partition(&self, day: Date) -> Result<DailyRoster<'_>> {
        partition(self.members(), day)
    }

    /// Summarize `month`.
    fn month_summary(&self, month: YearMonth) -> Result<MonthSummary<'_>> {
        month_summary(self.members(), month)
    }

    /// Vacations that end on or after `today`.
    fn upcoming_vacations(&self, today: Date) -> Vec<UpcomingVacation<'_>> {
        upcoming_vacations(self.members(), today)
    }
}

impl RosterProvider for [TeamMember] {
    fn members(&self) -> &[TeamMember] {
        self
    }
}

impl RosterProvider for Vec<TeamMember> {
    fn members(&self) -> &[TeamMember] {
        self
    }
}

/// An editable roster, sorted by case-insensitive name.
///
/// Members with equal names keep insertion order.  Serialized as a JSON
/// array of members; loading one re-applies every check of [`Roster::add`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TeamMember>", into = "Vec<TeamMember>")]
pub struct Roster {
    members: Vec<TeamMember>,
}

impl Roster {
    /// An empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Return `true` if the roster has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over members in roster order.
    pub fn iter(&self) -> std::slice::Iter<'_, TeamMember> {
        self.members.iter()
    }

    /// The member with `id`.
    pub fn get(&self, id: &MemberId) -> Option<&TeamMember> {
        self.members.iter().find(|m| &m.id == id)
    }

    /// Add a member.
    ///
    /// The name is trimmed.
    ///
    /// # Errors
    /// * [`Error::InvalidArgument`] for a blank name.
    /// * [`Error::InvalidRuleConfiguration`] for an invalid schedule rule.
    /// * [`Error::DuplicateMember`] if the id is already on the roster.
    pub fn add(&mut self, member: TeamMember) -> Result<()> {
        let member = checked(member)?;
        if self.get(&member.id).is_some() {
            return Err(Error::DuplicateMember(member.id.to_string()));
        }
        info!(id = %member.id, name = %member.name, "member added");
        self.insert_sorted(member);
        Ok(())
    }

    /// Replace the member carrying `member.id`.
    ///
    /// # Errors
    /// [`Error::MemberNotFound`] if no member has that id, plus the
    /// validation errors of [`Roster::add`].
    pub fn update(&mut self, member: TeamMember) -> Result<()> {
        let member = checked(member)?;
        let pos = self.position(&member.id)?;
        self.members.remove(pos);
        info!(id = %member.id, name = %member.name, "member updated");
        self.insert_sorted(member);
        Ok(())
    }

    /// Remove and return the member with `id`.
    pub fn remove(&mut self, id: &MemberId) -> Result<TeamMember> {
        let pos = self.position(id)?;
        info!(%id, "member removed");
        Ok(self.members.remove(pos))
    }

    /// Parse a roster from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the roster as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn position(&self, id: &MemberId) -> Result<usize> {
        self.members
            .iter()
            .position(|m| &m.id == id)
            .ok_or_else(|| Error::MemberNotFound(id.to_string()))
    }

    fn insert_sorted(&mut self, member: TeamMember) {
        let key = sort_key(&member.name);
        let pos = self.members.partition_point(|m| sort_key(&m.name) <= key);
        self.members.insert(pos, member);
    }
}

fn sort_key(name: &str) -> String {
    name.to_lowercase()
}

/// Trim the name and validate the member before it enters the roster.
fn checked(mut member: TeamMember) -> Result<TeamMember> {
    escala_core::ensure!(
        !member.name.trim().is_empty(),
        InvalidArgument,
        "member {} has a blank name",
        member.id
    );
    member.name = member.name.trim().to_owned();
    member.schedule.validate()?;
    Ok(member)
}

impl RosterProvider for Roster {
    fn members(&self) -> &[TeamMember] {
        &self.members
    }
}

impl TryFrom<Vec<TeamMember>> for Roster {
    type Error = Error;

    fn try_from(members: Vec<TeamMember>) -> Result<Self> {
        let mut roster = Roster::new();
        for member in members {
            roster.add(member)?;
        }
        Ok(roster)
    }
}

impl From<Roster> for Vec<TeamMember> {
    fn from(roster: Roster) -> Self {
        roster.members
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a TeamMember;
    type IntoIter = std::slice::Iter<'a, TeamMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
