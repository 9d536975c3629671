/// Moves the user to another screen.
pub trait Navigator {
    fn redirect(&self, path: &str);
}
