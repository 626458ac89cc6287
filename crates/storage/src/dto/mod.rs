pub mod athlete;
pub mod category;
pub mod common;
pub mod training_center;

/// Maps a DTO field name to the JSON name clients send and receive.
pub fn wire_name(field: &str) -> &str {
    match field {
        "name" => "nome",
        "tax_id" => "cpf",
        "age" => "idade",
        "weight" => "peso",
        "height" => "altura",
        "sex" => "sexo",
        "category" => "categoria",
        "training_center" => "centro_treinamento",
        "address" => "endereco",
        "owner" => "proprietario",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::dto::athlete::CreateAthleteRequest;
    use crate::dto::training_center::CreateTrainingCenterRequest;

    #[test]
    fn test_wire_names_match_serialized_keys() {
        let athlete: CreateAthleteRequest = serde_json::from_value(json!({
            "nome": "Joao",
            "cpf": "12345678900",
            "idade": 25,
            "peso": 75.5,
            "altura": 1.75,
            "sexo": "M",
            "categoria": { "nome": "Scale" },
            "centro_treinamento": { "nome": "CT King" }
        }))
        .unwrap();
        let serialized = serde_json::to_value(&athlete).unwrap();
        for field in [
            "name",
            "tax_id",
            "age",
            "weight",
            "height",
            "sex",
            "category",
            "training_center",
        ] {
            assert!(serialized.get(wire_name(field)).is_some(), "{field}");
        }

        let center = CreateTrainingCenterRequest {
            name: "CT King".to_string(),
            address: "Rua X, Q02".to_string(),
            owner: "Marcos".to_string(),
        };
        let serialized = serde_json::to_value(&center).unwrap();
        for field in ["name", "address", "owner"] {
            assert!(serialized.get(wire_name(field)).is_some(), "{field}");
        }
    }

    #[test]
    fn test_unknown_fields_keep_their_name() {
        assert_eq!(wire_name("created_at"), "created_at");
    }
}
