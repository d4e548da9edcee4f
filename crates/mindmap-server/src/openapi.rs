//! OpenAPI 3 description of the HTTP surface, served at `/openapi.json`.

use serde_json::{json, Value};

pub const API_TITLE: &str = "Mind map API";
pub const API_DESCRIPTION: &str = "Store mind map apps as ordered path/text leaves and browse them as a tree.";
pub const API_TAG: &str = "Mind map apps";

fn detail_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/HTTPError" } }
        }
    })
}

fn json_response(description: &str, schema: Value) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": schema } }
    })
}

fn app_id_param() -> Value {
    json!({
        "name": "app_id",
        "in": "path",
        "required": true,
        "schema": { "type": "string" }
    })
}

/// The `info` block, shared with `/info`.
pub fn api_info() -> Value {
    json!({
        "title": API_TITLE,
        "description": API_DESCRIPTION,
        "version": env!("CARGO_PKG_VERSION"),
        "termsOfService": "https://127.0.0.1/terms/",
        "contact": {
            "name": "Arnaud SENE",
            "url": "https://127.0.0.1/contact/",
            "email": "arnaud.sene@pm.me"
        },
        "license": {
            "name": "Apache 2.0",
            "url": "https://www.apache.org/licenses/LICENSE-2.0.html"
        }
    })
}

pub fn openapi_spec() -> Value {
    let app_ref = json!({ "$ref": "#/components/schemas/App" });
    json!({
        "openapi": "3.0.3",
        "info": api_info(),
        "tags": [
            {
                "name": API_TAG,
                "description": "A Mind map API for testing",
                "externalDocs": {
                    "description": "Mind map items external docs",
                    "url": "https://127.0.0.1"
                }
            }
        ],
        "paths": {
            "/": {
                "get": {
                    "summary": "Read all apps in html",
                    "responses": {
                        "200": {
                            "description": "Tree view of every app",
                            "content": { "text/html": { "schema": { "type": "string" } } }
                        }
                    }
                }
            },
            "/apps": {
                "get": {
                    "tags": [API_TAG],
                    "summary": "Read apps",
                    "responses": {
                        "200": json_response("Every stored app", json!({ "type": "array", "items": app_ref })),
                    }
                }
            },
            "/apps/": {
                "post": {
                    "tags": [API_TAG],
                    "summary": "Create an app",
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": app_ref } }
                    },
                    "responses": {
                        "200": json_response("The created app", app_ref.clone()),
                        "404": detail_response("An app with this id already exists"),
                    }
                }
            },
            "/apps/{app_id}": {
                "get": {
                    "tags": [API_TAG],
                    "summary": "Read an app by id",
                    "parameters": [app_id_param()],
                    "responses": {
                        "200": json_response("The app", app_ref.clone()),
                        "404": detail_response("No app has this id"),
                    }
                },
                "put": {
                    "tags": [API_TAG],
                    "summary": "Add a leaf in app",
                    "parameters": [app_id_param()],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": { "schema": { "$ref": "#/components/schemas/Leaf" } }
                        }
                    },
                    "responses": {
                        "200": json_response("The app with the leaf appended", app_ref.clone()),
                        "404": detail_response("No app has this id"),
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Leaf": {
                    "type": "object",
                    "properties": {
                        "path": { "type": "string", "nullable": true },
                        "text": { "type": "string", "nullable": true }
                    }
                },
                "App": {
                    "type": "object",
                    "required": ["id"],
                    "properties": {
                        "id": { "type": "string" },
                        "data": {
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/Leaf" },
                            "default": []
                        }
                    }
                },
                "HTTPError": {
                    "type": "object",
                    "required": ["detail"],
                    "properties": { "detail": { "type": "string" } }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_described() {
        let spec = openapi_spec();
        let paths = spec["paths"].as_object().unwrap();
        let mut keys: Vec<_> = paths.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["/", "/apps", "/apps/", "/apps/{app_id}"]);
        assert!(paths["/apps/{app_id}"].get("get").is_some());
        assert!(paths["/apps/{app_id}"].get("put").is_some());
        assert!(paths["/apps/"].get("post").is_some());
    }

    #[test]
    fn error_responses_carry_detail() {
        let spec = openapi_spec();
        let put_404 = &spec["paths"]["/apps/{app_id}"]["put"]["responses"]["404"];
        assert_eq!(
            put_404["content"]["application/json"]["schema"]["$ref"],
            "#/components/schemas/HTTPError"
        );
        assert_eq!(
            spec["components"]["schemas"]["HTTPError"]["required"],
            json!(["detail"])
        );
    }

    #[test]
    fn info_matches_metadata() {
        let info = api_info();
        assert_eq!(info["title"], API_TITLE);
        assert_eq!(info["termsOfService"], "https://127.0.0.1/terms/");
        assert_eq!(openapi_spec()["tags"][0]["name"], API_TAG);
    }
}
