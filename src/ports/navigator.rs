//! Navigator port - hands a target path to the routing layer.

/// Fire-and-forget page navigation.
pub trait Navigator: Send + Sync {
    /// Request navigation to `path`. No result is observed.
    fn navigate(&self, path: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigator_is_object_safe() {
        fn _accepts_dyn(_navigator: &dyn Navigator) {}
    }
}
