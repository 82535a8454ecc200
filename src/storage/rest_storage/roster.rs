//! Roster lookups.

use super::RestStorage;
use crate::errors::Result;
use crate::models::roster::entities::Student;

impl RestStorage {
    /// Resolve a student by display name within a class.
    ///
    /// Names are matched exactly after trimming; the roster endpoint
    /// filters server-side but may return near matches, so the exact
    /// comparison happens here.
    pub(crate) async fn resolve_student_impl(
        &self,
        class_id: i64,
        name: &str,
    ) -> Result<Option<Student>> {
        let trimmed = name.trim();
        let response = self
            .get_json::<Vec<Student>>(
                &format!("/classes/{class_id}/students"),
                &[
                    ("search", trimmed.to_string()),
                    ("size", self.roster_page_size.to_string()),
                ],
            )
            .await?;

        if response.is_not_found() {
            return Ok(None);
        }

        let students = response.into_data()?;
        Ok(students.into_iter().find(|s| s.name == trimmed))
    }
}
