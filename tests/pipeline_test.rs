#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::io;
    use std::time::Duration;

    use base64::{engine::general_purpose, Engine};
    use skull_textures::{
        apply, place_and_apply, Applied, BlockPos, HttpResponse, ItemStack,
        Material, NotFoundReason, ProfileTransport, Resolver, ResolverConfig,
        SkinSource, SkullError, SkullTarget, Sleeper, TexturePayload, World,
    };
    use url::Url;
    use uuid::Uuid;

    const NOTCH_SKIN: &str =
        "http://textures.minecraft.net/texture/292009a4925b58f02c77dadc3ecef07ea4c7472f64e0fdc32ce5522489362680";

    /// Session server stand-in answering from a fixed table of players.
    struct FakeSessionServer {
        players: Vec<(Uuid, String)>,
        down_for: Cell<usize>,
        requests: Cell<usize>,
    }

    impl FakeSessionServer {
        fn with_player(id: Uuid, skin_url: &str) -> Self {
            let document = format!(
                r#"{{"timestamp":1700000000000,"profileId":"{}","profileName":"Notch","textures":{{"SKIN":{{"url":"{}"}}}}}}"#,
                id.simple(),
                skin_url
            );
            Self {
                players: vec![(id, general_purpose::STANDARD.encode(document))],
                down_for: Cell::new(0),
                requests: Cell::new(0),
            }
        }
    }

    impl ProfileTransport for FakeSessionServer {
        fn get(&self, url: &Url) -> skull_textures::Result<HttpResponse> {
            self.requests.set(self.requests.get() + 1);
            if self.down_for.get() > 0 {
                self.down_for.set(self.down_for.get() - 1);
                return Err(SkullError::Io(io::Error::new(
                    io::ErrorKind::TimedOut,
                    "timed out",
                )));
            }

            let requested = url
                .path_segments()
                .and_then(|mut s| s.next_back())
                .and_then(|s| Uuid::parse_str(s).ok());
            let player = self
                .players
                .iter()
                .find(|(id, _)| Some(*id) == requested);

            Ok(match player {
                Some((id, value)) => HttpResponse::ok(format!(
                    r#"{{"id":"{}","name":"Notch","properties":[{{"name":"textures","value":"{}"}}]}}"#,
                    id.simple(),
                    value
                )),
                None => HttpResponse {
                    status: 204,
                    body: String::new(),
                },
            })
        }
    }

    #[derive(Default)]
    struct Clock {
        elapsed: RefCell<Duration>,
    }

    impl Sleeper for Clock {
        fn sleep(&self, duration: Duration) {
            *self.elapsed.borrow_mut() += duration;
        }
    }

    fn notch() -> Uuid {
        Uuid::parse_str("069a79f4-44e9-4726-a5be-fca90e38aaf5").unwrap()
    }

    #[test]
    fn player_head_from_session_server() {
        let resolver = Resolver::with_transport(
            FakeSessionServer::with_player(notch(), NOTCH_SKIN),
            Clock::default(),
            ResolverConfig::default(),
        );
        let mut head = ItemStack::player_head();

        let applied = apply(&mut head, notch().into(), &resolver).unwrap();

        let profile = head.profile().unwrap();
        assert_eq!(applied, Applied::Attached(profile.id));
        assert_ne!(profile.id, notch());
        let document = profile.textures().unwrap().decode().unwrap();
        assert_eq!(document.skin_url(), Some(NOTCH_SKIN));
        assert_eq!(document.profile_name.as_deref(), Some("Notch"));
    }

    #[test]
    fn recovers_from_short_outage() {
        let server = FakeSessionServer::with_player(notch(), NOTCH_SKIN);
        server.down_for.set(4);
        let clock = Clock::default();
        let resolver =
            Resolver::with_transport(&server, &clock, ResolverConfig::default());
        let mut head = ItemStack::player_head();

        apply(&mut head, notch().into(), &resolver).unwrap();

        assert!(head.profile().is_some());
        assert_eq!(server.requests.get(), 5);
        assert_eq!(*clock.elapsed.borrow(), Duration::from_secs(4 * 60));
    }

    #[test]
    fn long_outage_degrades_to_plain_head() {
        let server = FakeSessionServer::with_player(notch(), NOTCH_SKIN);
        server.down_for.set(usize::MAX);
        let clock = Clock::default();
        let resolver =
            Resolver::with_transport(&server, &clock, ResolverConfig::default());
        let mut head = ItemStack::player_head();

        let applied = apply(&mut head, notch().into(), &resolver).unwrap();

        assert_eq!(applied, Applied::Unchanged(NotFoundReason::RetriesExhausted));
        assert!(head.profile().is_none());
        assert_eq!(server.requests.get(), 11);
        assert_eq!(*clock.elapsed.borrow(), Duration::from_secs(10 * 60));
    }

    #[test]
    fn url_and_payload_sources_agree() {
        let resolver = Resolver::with_transport(
            FakeSessionServer::with_player(notch(), NOTCH_SKIN),
            Clock::default(),
            ResolverConfig::default(),
        );
        let payload = skull_textures::encode_from_url(NOTCH_SKIN).unwrap();

        let mut from_url = ItemStack::player_head();
        apply(&mut from_url, SkinSource::Url(NOTCH_SKIN.into()), &resolver)
            .unwrap();
        let mut from_payload = ItemStack::player_head();
        apply(&mut from_payload, payload.into(), &resolver).unwrap();

        assert_eq!(from_url, from_payload);
    }

    #[test]
    fn offline_player_block_is_plain_head() {
        let resolver = Resolver::with_transport(
            FakeSessionServer::with_player(notch(), NOTCH_SKIN),
            Clock::default(),
            ResolverConfig::default(),
        );
        let pos = BlockPos::new(4, 65, 4);
        let mut world = World::new();

        let applied =
            place_and_apply(&mut world.block_at(pos), Uuid::new_v4().into(), &resolver)
                .unwrap();

        assert_eq!(applied, Applied::Unchanged(NotFoundReason::Unregistered));
        assert_eq!(world.material(pos), Material::PlayerHead);
        assert!(world.block_at(pos).profile().is_none());
    }

    #[test]
    fn placed_block_shows_player_skin() {
        let resolver = Resolver::with_transport(
            FakeSessionServer::with_player(notch(), NOTCH_SKIN),
            Clock::default(),
            ResolverConfig::default(),
        );
        let pos = BlockPos::new(0, 64, 0);
        let mut world = World::new();

        place_and_apply(&mut world.block_at(pos), notch().into(), &resolver)
            .unwrap();

        let state = world.state(pos).unwrap();
        let textures = state.profile.as_ref().unwrap().textures().unwrap();
        assert_eq!(textures.decode().unwrap().skin_url(), Some(NOTCH_SKIN));
        assert_eq!(world.physics_updates(), 0);
    }

    #[test]
    fn same_payload_same_identity() {
        let payload = TexturePayload::new("e3RleHR1cmVzOnt9fQ==");
        assert_eq!(
            skull_textures::synthetic_id(&payload),
            skull_textures::synthetic_id(&payload)
        );
    }
}
