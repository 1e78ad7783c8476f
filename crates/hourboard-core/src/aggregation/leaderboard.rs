use crate::entities::User;

/// Users ordered by hours, highest first
///
/// The sort is stable, so ties keep their retrieval order.
pub fn compute_leaderboard(users: &[User]) -> Vec<User> {
    let mut ranked = users.to_vec();
    ranked.sort_by(|a, b| b.hours.cmp(&a.hours));
    ranked
}
