use chrono::Local;

/// Fresh record identifier: the current epoch milliseconds, bumped until it
/// no longer collides with an existing id.
pub fn fresh_id<F>(taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut candidate = Local::now().timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !taken(&id) {
            return id;
        }
        candidate += 1;
    }
}
