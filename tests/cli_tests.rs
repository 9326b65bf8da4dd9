//! End-to-end tests driving the compiled binary against a mock endpoint.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn pokedex_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("pokedex"))
}

fn list_body() -> Value {
    json!({
        "data": {
            "pokemon_v2_pokemon_aggregate": {
                "aggregate": { "count": 493 }
            },
            "pokemon_v2_pokemon": [
                {
                    "id": 4,
                    "name": "charmander",
                    "pokemon_v2_pokemontypes": [
                        { "slot": 1, "pokemon_v2_type": { "name": "fire" } }
                    ]
                },
                {
                    "id": 6,
                    "name": "charizard",
                    "pokemon_v2_pokemontypes": [
                        { "slot": 1, "pokemon_v2_type": { "name": "fire" } },
                        { "slot": 2, "pokemon_v2_type": { "name": "flying" } }
                    ]
                }
            ]
        }
    })
}

fn empty_list_body() -> Value {
    json!({
        "data": {
            "pokemon_v2_pokemon_aggregate": {
                "aggregate": { "count": 0 }
            },
            "pokemon_v2_pokemon": []
        }
    })
}

fn squirtle_body() -> Value {
    json!({
        "data": {
            "pokemon_v2_pokemon": [
                {
                    "id": 7,
                    "name": "squirtle",
                    "height": 5,
                    "base_experience": 63,
                    "weight": 90,
                    "pokemon_v2_pokemontypes": [
                        { "slot": 1, "pokemon_v2_type": { "name": "water" } }
                    ],
                    "pokemon_v2_pokemonstats": [
                        { "base_stat": 44, "pokemon_v2_stat": { "name": "hp" } },
                        { "base_stat": 50, "pokemon_v2_stat": { "name": "special-attack" } }
                    ],
                    "pokemon_v2_pokemonabilities": [
                        { "slot": 1, "is_hidden": false, "pokemon_v2_ability": { "name": "torrent" } },
                        { "slot": 3, "is_hidden": true, "pokemon_v2_ability": { "name": "rain-dish" } }
                    ],
                    "pokemon_v2_pokemonspecy": {
                        "pokemon_v2_pokemonspeciesflavortexts": [
                            { "flavor_text": "After birth, its\nback swells and\u{c}hardens into a\nshell." }
                        ],
                        "pokemon_v2_pokemonspeciesnames": [
                            { "genus": "Tiny Turtle Pokémon" }
                        ],
                        "pokemon_v2_evolutionchain": {
                            "pokemon_v2_pokemonspecies": [
                                { "id": 7, "name": "squirtle", "pokemon_v2_pokemonevolutions": [] },
                                { "id": 8, "name": "wartortle", "pokemon_v2_pokemonevolutions": [ { "min_level": 16 } ] },
                                { "id": 9, "name": "blastoise", "pokemon_v2_pokemonevolutions": [ { "min_level": 36 } ] }
                            ]
                        }
                    }
                }
            ]
        }
    })
}

async fn mount_list(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("getPokemonsList"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_by_id(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("getPokemonById"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    pokedex_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pokédex"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("tui"));
}

#[test]
fn test_version() {
    pokedex_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pokedex"));
}

#[test]
fn test_offset_conflicts_with_page() {
    pokedex_cmd()
        .args(["list", "--offset", "10", "--page", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_invalid_search_pattern_fails_before_any_request() {
    pokedex_cmd()
        .args(["list", "--search", "("])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid search pattern"));
}

#[test]
fn test_show_rejects_ids_past_the_dex_cutoff() {
    pokedex_cmd()
        .args(["show", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the dex range 1..=493"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_file_page_size_is_honored() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(".pokedex.yml"), "list:\n  limit: 1\n").unwrap();

        let server = MockServer::start().await;
        let uri = server.uri();

        // Only a request that carries the configured page size matches.
        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_string_contains(r#""limit":1,"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_body()))
            .expect(1)
            .mount(&server)
            .await;

        pokedex_cmd()
            .args(["list", "--endpoint", uri.as_str()])
            .current_dir(temp_dir.path())
            .assert()
            .success();
    });
}

#[test]
fn test_explicit_config_path() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom.yml");
        std::fs::write(&config_path, "list:\n  limit: 1\n").unwrap();

        let server = MockServer::start().await;
        let uri = server.uri();

        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_string_contains(r#""limit":1,"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_body()))
            .expect(1)
            .mount(&server)
            .await;

        pokedex_cmd()
            .args([
                "list",
                "--config",
                config_path.to_str().unwrap(),
                "--endpoint",
                uri.as_str(),
            ])
            .assert()
            .success();
    });
}

#[test]
fn test_missing_explicit_config_fails() {
    pokedex_cmd()
        .args(["list", "--config", "/definitely/not/here.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config from"));
}

#[test]
fn test_endpoint_env_var() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let server = MockServer::start().await;
        mount_list(&server, list_body()).await;

        pokedex_cmd()
            .arg("list")
            .env("POKEDEX_ENDPOINT", server.uri())
            .assert()
            .success()
            .stdout(predicate::str::contains("Charizard"));
    });
}

// =============================================================================
// List
// =============================================================================

#[test]
fn test_list_renders_a_page() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let server = MockServer::start().await;
        let uri = server.uri();
        mount_list(&server, list_body()).await;

        pokedex_cmd()
            .args(["list", "--endpoint", uri.as_str()])
            .assert()
            .success()
            .stdout(predicate::str::contains("#004"))
            .stdout(predicate::str::contains("Charmander"))
            .stdout(predicate::str::contains("Charizard"))
            .stdout(predicate::str::contains("Showing 1-2 of 493"));
    });
}

#[test]
fn test_list_page_flag_translates_to_offset() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let server = MockServer::start().await;
        let uri = server.uri();

        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_string_contains(r#""offset":30"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_body()))
            .expect(1)
            .mount(&server)
            .await;

        pokedex_cmd()
            .args(["list", "--page", "3", "--limit", "15", "--endpoint", uri.as_str()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Showing 31-32 of 493"));
    });
}

#[test]
fn test_list_json_output() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let server = MockServer::start().await;
        let uri = server.uri();
        mount_list(&server, list_body()).await;

        let output = pokedex_cmd()
            .args(["list", "--json", "--endpoint", uri.as_str()])
            .output()
            .unwrap();
        assert!(output.status.success());

        let page: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(page["count"], 493);
        assert_eq!(page["pokemons"][0]["id"], 4);
        assert_eq!(page["pokemons"][1]["name"], "charizard");
        assert_eq!(page["pokemons"][1]["types"][1]["name"], "flying");
        assert!(
            page["pokemons"][0]["gif"]
                .as_str()
                .unwrap()
                .ends_with("/4.gif")
        );
    });
}

#[test]
fn test_list_with_no_matches() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let server = MockServer::start().await;
        let uri = server.uri();
        mount_list(&server, empty_list_body()).await;

        pokedex_cmd()
            .args(["list", "--search", "zzz", "--endpoint", uri.as_str()])
            .assert()
            .success()
            .stdout(predicate::str::contains("No Pokémon found."));
    });
}

#[test]
fn test_list_alias_ls() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let server = MockServer::start().await;
        let uri = server.uri();
        mount_list(&server, list_body()).await;

        pokedex_cmd()
            .args(["ls", "--endpoint", uri.as_str()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Charmander"));
    });
}

// =============================================================================
// Show
// =============================================================================

#[test]
fn test_show_renders_full_entry() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let server = MockServer::start().await;
        let uri = server.uri();
        mount_by_id(&server, squirtle_body()).await;

        pokedex_cmd()
            .args(["show", "7", "--endpoint", uri.as_str()])
            .assert()
            .success()
            .stdout(predicate::str::contains("#007 Squirtle"))
            .stdout(predicate::str::contains("Tiny Turtle Pokémon"))
            .stdout(predicate::str::contains("back swells and hardens"))
            .stdout(predicate::str::contains("torrent"))
            .stdout(predicate::str::contains("(hidden)"))
            .stdout(predicate::str::contains("0.5m"))
            .stdout(predicate::str::contains("9kg"))
            .stdout(predicate::str::contains("63 EXP"))
            .stdout(predicate::str::contains("Sp. Atk"))
            .stdout(predicate::str::contains(
                "Squirtle -[Lvl 16]-> Wartortle -[Lvl 36]-> Blastoise",
            ));
    });
}

#[test]
fn test_show_json_output() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let server = MockServer::start().await;
        let uri = server.uri();
        mount_by_id(&server, squirtle_body()).await;

        let output = pokedex_cmd()
            .args(["show", "7", "--json", "--endpoint", uri.as_str()])
            .output()
            .unwrap();
        assert!(output.status.success());

        let pokemon: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(pokemon["id"], 7);
        assert_eq!(pokemon["baseEXP"], 63);
        assert_eq!(pokemon["genus"], "Tiny Turtle Pokémon");
        // JSON keeps the raw flavor text, line breaks included.
        assert!(pokemon["flavorText"].as_str().unwrap().contains('\n'));

        let chain = pokemon["evolutionChain"].as_array().unwrap();
        assert_eq!(chain.len(), 3);
        assert!(chain[0]["minLevel"].is_null());
        assert_eq!(chain[1]["minLevel"], 16);
    });
}

#[test]
fn test_show_json_omits_chain_for_single_stage_species() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let mut body = squirtle_body();
        body["data"]["pokemon_v2_pokemon"][0]["pokemon_v2_pokemonspecy"]
            ["pokemon_v2_evolutionchain"]["pokemon_v2_pokemonspecies"] = json!([
            { "id": 7, "name": "squirtle", "pokemon_v2_pokemonevolutions": [] }
        ]);

        let server = MockServer::start().await;
        let uri = server.uri();
        mount_by_id(&server, body).await;

        let output = pokedex_cmd()
            .args(["show", "7", "--json", "--endpoint", uri.as_str()])
            .output()
            .unwrap();
        assert!(output.status.success());

        let pokemon: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert!(pokemon.get("evolutionChain").is_none());
    });
}

#[test]
fn test_show_surfaces_http_failures() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let server = MockServer::start().await;
        let uri = server.uri();

        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        pokedex_cmd()
            .args(["show", "7", "--endpoint", uri.as_str()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("getPokemonById returned HTTP 500"));
    });
}

#[test]
fn test_show_alias_info() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let server = MockServer::start().await;
        let uri = server.uri();
        mount_by_id(&server, squirtle_body()).await;

        pokedex_cmd()
            .args(["info", "7", "--endpoint", uri.as_str()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Squirtle"));
    });
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_search_sends_pattern_with_zero_offset() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let server = MockServer::start().await;
        let uri = server.uri();

        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_string_contains(r#""offset":0"#))
            .and(body_string_contains(r#""search":"^char""#))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_body()))
            .expect(1)
            .mount(&server)
            .await;

        pokedex_cmd()
            .args(["search", "^char", "--endpoint", uri.as_str()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Charmander"))
            .stdout(predicate::str::contains("Charizard"));
    });
}

#[test]
fn test_search_respects_limit_flag() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let server = MockServer::start().await;
        let uri = server.uri();

        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_string_contains(r#""limit":5,"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_body()))
            .expect(1)
            .mount(&server)
            .await;

        pokedex_cmd()
            .args(["find", "char", "--limit", "5", "--endpoint", uri.as_str()])
            .assert()
            .success();
    });
}

#[test]
fn test_search_rejects_bad_pattern() {
    pokedex_cmd()
        .args(["search", "["])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid search pattern"));
}
