//! Name-keyed projection registry.
//!
//! `register` installs a constructor under a projection id; `create` looks
//! the id up and builds a boxed projection from runtime parameters.
//! Registration happens once at startup through `&mut self`; afterwards the
//! registry can be shared freely across threads for lookups.

use std::collections::HashMap;

use log::{debug, trace};

use crate::error::{FactoryError, SetupError};
use crate::proj::bonne::Bonne;
use crate::proj::cassini::Cassini;
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::equirectangular::Equirectangular;
use crate::proj::lambert_conformal::LambertConformalConic;
use crate::proj::mercator::Mercator;
use crate::proj::params::ParamList;
use crate::proj::Projection;
use crate::proj::sinusoidal::Sinusoidal;

type Constructor =
    Box<dyn Fn(&ParamList, &Ellipsoid) -> Result<Box<dyn Projection>, SetupError> + Send + Sync>;

pub struct ProjectionFactory {
    constructors: HashMap<String, Constructor>,
}

impl ProjectionFactory {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// A registry with every built-in projection registered under its
    /// usual id.
    pub fn with_builtins() -> Self {
        let mut factory = Self::new();
        factory.register("bonne", |params, ell| Ok(Box::new(Bonne::new(params, ell)?)));
        factory.register("cass", |params, ell| Ok(Box::new(Cassini::new(params, ell)?)));
        factory.register("sinu", |params, ell| Ok(Box::new(Sinusoidal::new(params, ell)?)));
        factory.register("eqc", |params, ell| Ok(Box::new(Equirectangular::new(params, ell)?)));
        factory.register("merc", |params, ell| Ok(Box::new(Mercator::new(params, ell)?)));
        factory.register("lcc", |params, ell| {
            Ok(Box::new(LambertConformalConic::new(params, ell)?))
        });
        factory
    }

    /// Install `ctor` under `name`, replacing any previous registration for
    /// that name.
    pub fn register<F>(&mut self, name: &str, ctor: F)
    where
        F: Fn(&ParamList, &Ellipsoid) -> Result<Box<dyn Projection>, SetupError>
            + Send
            + Sync
            + 'static,
    {
        debug!("registering projection {name:?}");
        self.constructors.insert(name.to_owned(), Box::new(ctor));
    }

    /// Build a projection by id. The match is case-sensitive.
    pub fn create(
        &self,
        name: &str,
        params: &ParamList,
        ellipsoid: &Ellipsoid,
    ) -> Result<Box<dyn Projection>, FactoryError> {
        let ctor = self
            .constructors
            .get(name)
            .ok_or_else(|| FactoryError::UnknownProjection(name.to_owned()))?;
        trace!("creating projection {name:?}");
        Ok(ctor(params, ellipsoid)?)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered ids, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }
}

impl Default for ProjectionFactory {
    /// Same as [`ProjectionFactory::with_builtins`].
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::ellipsoid::{SPHERE, WGS84};
    use std::f64::consts::FRAC_PI_2;

    fn bonne_params() -> ParamList {
        ParamList::from([("lat_1", 40.0_f64.to_radians())])
    }

    #[test]
    fn test_builtins_registered() {
        let factory = ProjectionFactory::with_builtins();
        for name in ["bonne", "cass", "sinu", "eqc", "merc", "lcc"] {
            assert!(factory.contains(name), "missing builtin {name}");
        }
        assert_eq!(factory.names().count(), 6);
    }

    #[test]
    fn test_create_all_builtins() {
        let factory = ProjectionFactory::with_builtins();
        for name in ["bonne", "cass", "sinu", "eqc", "merc", "lcc"] {
            let proj = factory.create(name, &bonne_params(), &WGS84).unwrap();
            assert_eq!(proj.name(), name);
        }
    }

    #[test]
    fn test_unknown_name() {
        let factory = ProjectionFactory::with_builtins();
        let err = factory.create("not_a_real_projection", &ParamList::new(), &WGS84).err().unwrap();
        assert_eq!(err, FactoryError::UnknownProjection("not_a_real_projection".to_owned()));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let factory = ProjectionFactory::with_builtins();
        assert!(matches!(
            factory.create("Bonne", &bonne_params(), &WGS84),
            Err(FactoryError::UnknownProjection(_))
        ));
    }

    #[test]
    fn test_setup_error_passes_through() {
        let factory = ProjectionFactory::with_builtins();
        // Missing lat_1 means a zero standard parallel.
        let err = factory.create("bonne", &ParamList::new(), &WGS84).err().unwrap();
        assert_eq!(err, FactoryError::Setup(SetupError::DegenerateParallel));
    }

    #[test]
    fn test_created_matches_static_dispatch() {
        let factory = ProjectionFactory::with_builtins();
        let lon = 15.0_f64.to_radians();
        let lat = 52.0_f64.to_radians();

        for ellipsoid in [WGS84, SPHERE] {
            let boxed = factory.create("bonne", &bonne_params(), &ellipsoid).unwrap();
            let direct = Bonne::new(&bonne_params(), &ellipsoid).unwrap();
            assert_eq!(boxed.forward(lon, lat).unwrap(), direct.forward(lon, lat).unwrap());
        }

        let boxed = factory.create("merc", &ParamList::new(), &WGS84).unwrap();
        let direct = Mercator::new(&ParamList::new(), &WGS84).unwrap();
        assert_eq!(boxed.forward(lon, lat).unwrap(), direct.forward(lon, lat).unwrap());
    }

    #[test]
    fn test_reregistration_replaces() {
        let mut factory = ProjectionFactory::with_builtins();
        factory.register("bonne", |params, ell| Ok(Box::new(Sinusoidal::new(params, ell)?)));
        let proj = factory.create("bonne", &bonne_params(), &WGS84).unwrap();
        assert_eq!(proj.name(), "sinu");
    }

    #[test]
    fn test_custom_registration() {
        let mut factory = ProjectionFactory::new();
        factory.register("werner", |params, ell| {
            let pinned = params.clone().set("lat_1", FRAC_PI_2);
            Ok(Box::new(Bonne::new(&pinned, ell)?))
        });
        let proj = factory.create("werner", &ParamList::new(), &SPHERE).unwrap();
        assert_eq!(proj.forward(1.0, FRAC_PI_2).unwrap(), (0.0, 0.0));
    }

    #[test]
    fn test_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProjectionFactory>();
        assert_send_sync::<Box<dyn Projection>>();
    }
}
