use std::fmt;

/// Pages the core can send the user to. The view layer maps these onto its router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Home,
    Services,
    Signup,
    Login,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Home => "/",
            Destination::Services => "/services",
            Destination::Signup => "/signup",
            Destination::Login => "/login",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Client-side route transitions.
pub trait Navigator {
    fn navigate(&self, to: Destination);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, to: Destination) {
        (**self).navigate(to)
    }
}

#[cfg(test)]
mod tests {
    use super::Destination;

    #[test]
    fn paths_match_routes() {
        assert_eq!(Destination::Services.path(), "/services");
        assert_eq!(Destination::Login.to_string(), "/login");
        assert_eq!(Destination::Home.path(), "/");
    }
}
