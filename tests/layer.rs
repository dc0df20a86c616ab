use route_layer::{CompileError, Engine, Layer, LayerOptions, Match, MatchError};

const NO_PATH: Option<&str> = None;

fn layer(pattern: &str, options: LayerOptions) -> Layer<()> {
    Layer::new(pattern, options, ()).unwrap()
}

fn exact() -> LayerOptions {
    LayerOptions::new().end(true)
}

#[test]
fn layer_fast_slash() {
    let mut root = layer("/", LayerOptions::new());
    for path in ["", "/", "/user/42", "/a%zz/b", "no/leading/slash"] {
        assert!(root.matches(path).unwrap(), "{:?}", path);
        assert!(root.params().unwrap().is_empty());
        assert_eq!(root.path(), Some(""));
    }

    assert!(!root.matches(NO_PATH).unwrap());
    assert!(root.params().is_none());
    assert!(root.path().is_none());

    let mut root = layer("/", exact());
    assert!(root.matches("/").unwrap());
    assert!(!root.matches("/user").unwrap());
}

#[test]
fn layer_fast_star() {
    for options in [LayerOptions::new(), exact()] {
        let mut star = layer("*", options);
        for path in ["", "/", "/a/b/", "/foo%20bar", "caf%C3%A9"] {
            assert!(star.matches(path).unwrap());
            let params = star.params().unwrap();
            assert_eq!(params.len(), 1);
            assert_eq!(
                params.get("0"),
                Some(&*route_layer::decode_param(path).unwrap())
            );
            assert_eq!(star.path(), Some(path));
        }
    }

    let mut star = layer("*", LayerOptions::new());
    assert!(star.matches("/foo%20bar").unwrap());
    assert_eq!(star.params().unwrap().get("0"), Some("/foo bar"));
    assert_eq!(star.path(), Some("/foo%20bar"));
    assert!(!star.matches(NO_PATH).unwrap());
}

#[test]
fn layer_exact_end() {
    let mut user = layer("/user/:id", exact());

    assert!(user.matches("/user/42").unwrap());
    assert_eq!(user.params().unwrap().get("id"), Some("42"));
    assert_eq!(user.path(), Some("/user/42"));

    assert!(user.matches("/USER/42/").unwrap());
    assert_eq!(user.path(), Some("/USER/42/"));

    assert!(!user.matches("/user/42/x").unwrap());
    assert!(user.params().is_none());
    assert!(user.path().is_none());

    assert!(!user.matches("/user/").unwrap());
    assert!(!user.matches("/user").unwrap());
}

#[test]
fn layer_prefix() {
    let mut user = layer("/user/:id", LayerOptions::new());
    assert!(user.matches("/user/42/x").unwrap());
    assert_eq!(user.params().unwrap().get("id"), Some("42"));
    assert_eq!(user.path(), Some("/user/42"));

    let mut users = layer("/user", LayerOptions::new());
    assert!(users.matches("/user/").unwrap());
    assert_eq!(users.path(), Some("/user"));
    assert!(users.matches("/user/list").unwrap());
    assert_eq!(users.path(), Some("/user"));
    assert!(users.matches("/user").unwrap());
    assert_eq!(users.path(), Some("/user"));
    assert!(!users.matches("/users").unwrap());
}

#[test]
fn layer_strict_and_case() {
    let mut strict = layer("/a", exact().strict(true));
    assert!(strict.matches("/a").unwrap());
    assert!(!strict.matches("/a/").unwrap());

    let mut loose = layer("/a", exact());
    assert!(loose.matches("/a/").unwrap());

    let mut sensitive = layer("/User", exact().case_sensitive(true));
    assert!(sensitive.matches("/User").unwrap());
    assert!(!sensitive.matches("/user").unwrap());

    let mut insensitive = layer("/User", exact());
    assert!(insensitive.matches("/user").unwrap());
}

#[test]
fn layer_repeated_name() {
    for engine in [Engine::Native, Engine::SafeLinear] {
        let mut l = layer("/a/:x?/b/:x?", exact().engine(engine));

        assert!(l.matches("/a/b/v").unwrap());
        assert_eq!(l.params().unwrap().get("x"), Some("v"));

        assert!(l.matches("/a/v/b").unwrap());
        assert_eq!(l.params().unwrap().get("x"), Some("v"));

        assert!(l.matches("/a/u/b/v").unwrap());
        assert_eq!(l.params().unwrap().get("x"), Some("v"));

        assert!(l.matches("/a/b").unwrap());
        let params = l.params().unwrap();
        assert!(params.contains_key("x"));
        assert_eq!(params.get("x"), None);
        assert_eq!(params.len(), 1);
    }
}

#[test]
fn layer_decode() {
    let mut user = layer("/user/:id", exact());

    assert!(user.matches("/user/%E2%82%AC").unwrap());
    assert_eq!(user.params().unwrap().get("id"), Some("€"));

    assert!(user.matches("/user/a%2Fb").unwrap());
    assert_eq!(user.params().unwrap().get("id"), Some("a/b"));
    assert_eq!(user.path(), Some("/user/a%2Fb"));

    let err = user.matches("/user/%zz").unwrap_err();
    assert!(err.is_client_error());
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "Failed to decode param '%zz'");
    match err {
        MatchError::Decode(e) => assert_eq!(e.value(), "%zz"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(user.params().is_none());
    assert!(user.path().is_none());

    let mut star = layer("*", LayerOptions::new());
    assert!(star.matches("%").unwrap_err().is_client_error());
}

#[test]
fn layer_engine_equivalence() {
    let patterns = [
        "/user/:id",
        "/file/:name.:ext?",
        "/a/:x?/b/:x?",
        "/n/:id(\\d+)",
        "/files/*",
        "/",
        "/(\\d+)/:slug",
    ];
    let paths = [
        "",
        "/",
        "/user/42",
        "/USER/42",
        "/user/42/x",
        "/user/%20",
        "/user/%",
        "/file/a.txt",
        "/file/a",
        "/a/b/v",
        "/a/v/b",
        "/n/12",
        "/n/ab",
        "/files/x/y",
        "/files/",
        "/7/hello",
    ];

    for &pattern in patterns.iter() {
        for end in [false, true] {
            let native = layer(pattern, LayerOptions::new().end(end));
            let safe = layer(pattern, LayerOptions::new().end(end).engine(Engine::SafeLinear));
            assert_eq!(safe.engine(), Engine::SafeLinear);

            for &path in paths.iter() {
                let lhs: Result<Option<Match>, bool> =
                    native.find(Some(path)).map_err(|e| e.is_client_error());
                let rhs: Result<Option<Match>, bool> =
                    safe.find(Some(path)).map_err(|e| e.is_client_error());
                assert_eq!(lhs, rhs, "pattern = {:?}, end = {}, path = {:?}", pattern, end, path);
            }
        }
    }
}

#[test]
fn layer_safe_linear_rejects_lookaround() {
    let pattern = "/:id((?!admin)[^/]+)";

    let ret = Layer::new(pattern, exact().engine(Engine::SafeLinear), ());
    assert!(matches!(ret, Err(CompileError::SafeLinear(_))));

    let mut native = layer(pattern, exact());
    assert!(native.matches("/bob").unwrap());
    assert_eq!(native.params().unwrap().get("id"), Some("bob"));
    assert!(!native.matches("/admin").unwrap());

    // fast paths never build an engine
    let star = layer("*", LayerOptions::new().engine(Engine::SafeLinear));
    assert_eq!(star.engine(), Engine::SafeLinear);
}

#[test]
fn layer_regex_pattern() {
    let re = fancy_regex::Regex::new(r"^/post/(?P<slug>[a-z-]+)(?:/(\d+))?(?<=\w)").unwrap();
    let mut post = Layer::new(re, LayerOptions::new().engine(Engine::SafeLinear), ()).unwrap();
    assert_eq!(post.engine(), Engine::Native);

    assert!(post.matches("/post/hello-world/3").unwrap());
    let params = post.params().unwrap();
    assert_eq!(params.get("slug"), Some("hello-world"));
    assert_eq!(params.get("0"), Some("3"));
    assert_eq!(post.path(), Some("/post/hello-world/3"));

    assert!(post.matches("/post/hello").unwrap());
    assert!(post.params().unwrap().contains_key("0"));
    assert_eq!(post.params().unwrap().get("0"), None);

    let dir = fancy_regex::Regex::new("^/dir/").unwrap();
    let mut dir = Layer::new(dir, LayerOptions::new(), ()).unwrap();
    assert!(dir.matches("/dir/x").unwrap());
    assert_eq!(dir.path(), Some("/dir"));
}

#[test]
fn layer_named_and_positional_share_slot() {
    for engine in [Engine::Native, Engine::SafeLinear] {
        let mut l = layer("/:0/*", exact().engine(engine));
        assert!(l.matches("/a/b").unwrap());
        let params = l.params().unwrap();
        assert_eq!(params.get("0"), Some("b"));
        assert_eq!(params.len(), 1);
    }
}

#[test]
fn layer_engine_error() {
    let re = fancy_regex::RegexBuilder::new(r"^(?=a)(a|a)*b$")
        .backtrack_limit(10)
        .build()
        .unwrap();
    let mut l = Layer::new(re, LayerOptions::new(), ()).unwrap();

    let err = l.matches("aaaaaaaaaaaaaaaaaaaaaaaa").unwrap_err();
    assert!(matches!(err, MatchError::Engine(_)));
    assert!(!err.is_client_error());
    assert_eq!(err.status(), None);
    assert!(l.params().is_none());
    assert!(l.path().is_none());
}

#[test]
fn layer_list_pattern() {
    let paths = vec!["/a/:x".to_owned(), "/b/:y".to_owned()];
    let mut l = Layer::new(paths, exact(), ()).unwrap();

    assert!(l.matches("/b/1").unwrap());
    let params = l.params().unwrap();
    assert_eq!(params.get("y"), Some("1"));
    assert!(params.contains_key("x"));
    assert_eq!(params.get("x"), None);

    assert!(!l.matches("/c/1").unwrap());
}

#[test]
fn layer_find_is_pure() {
    let l = layer("/user/:id", exact());

    let m = l.find(Some("/user/7")).unwrap().unwrap();
    assert_eq!(m.path(), "/user/7");
    assert_eq!(m.params().get("id"), Some("7"));
    assert_eq!(m.params().parse::<u32>("id"), Some(Ok(7)));
    assert!(l.params().is_none());

    assert_eq!(l.find(None).unwrap(), None);
    assert_eq!(l.find(Some("/post/7")).unwrap(), None);

    std::thread::scope(|s| {
        for i in 0..4 {
            let l = &l;
            s.spawn(move || {
                let path = format!("/user/{}", i);
                let m = l.find(Some(&path)).unwrap().unwrap();
                assert_eq!(m.params().get("id"), Some(&*i.to_string()));
            });
        }
    });
}

#[test]
fn layer_accessors() {
    let mut l = Layer::new("/user/:id/*", exact(), "user").unwrap();
    assert_eq!(*l.handle(), "user");
    *l.handle_mut() = "account";
    assert!(l.is_end());
    assert_eq!(l.engine(), Engine::Native);
    assert_eq!(l.keys().len(), l.pattern().group_count());
    assert_eq!(l.keys()[0].to_string(), "id");
    assert_eq!(l.keys()[1].to_string(), "0");
    assert_eq!(l.into_handle(), "account");
}
