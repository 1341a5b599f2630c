#[cfg(test)]
mod tests {
    use crate::{Face, Hand, HandError};

    #[test]
    fn five_dice_preserve_order() {
        let dice = [1, 2, 3, 4, 5];
        assert_eq!(Hand::new(&dice).unwrap().dice(), dice);

        let shuffled = [6, 1, 6, 2, 3];
        assert_eq!(Hand::new(&shuffled).unwrap().dice(), shuffled);
    }

    #[test]
    fn short_hand_is_rejected() {
        assert_eq!(
            Hand::new(&[1, 2, 3, 4]),
            Err(HandError::InvalidLength { actual: 4 })
        );
    }

    #[test]
    fn long_hand_is_rejected() {
        assert_eq!(
            Hand::new(&[1, 2, 3, 4, 5, 6]),
            Err(HandError::InvalidLength { actual: 6 })
        );
        assert_eq!(
            Hand::try_from(Vec::<u8>::new()),
            Err(HandError::InvalidLength { actual: 0 })
        );
    }

    #[test]
    fn out_of_range_faces_are_rejected() {
        assert_eq!(
            Hand::new(&[1, 2, 0, 4, 5]),
            Err(HandError::FaceOutOfRange { index: 2, face: 0 })
        );
        assert_eq!(
            Hand::try_from([1u8, 2, 3, 4, 7]),
            Err(HandError::FaceOutOfRange { index: 4, face: 7 })
        );
    }

    #[test]
    fn error_messages_name_the_problem() {
        let msg = Hand::new(&[1, 2, 3]).unwrap_err().to_string();
        assert!(msg.contains("expected 5"), "{msg}");
        let msg = Hand::new(&[9, 1, 1, 1, 1]).unwrap_err().to_string();
        assert!(msg.contains("face 9"), "{msg}");
    }

    #[test]
    fn parses_comma_and_space_separated() {
        let h: Hand = "1,2,3,4,5".parse().unwrap();
        assert_eq!(h.dice(), [1, 2, 3, 4, 5]);
        let h: Hand = " 6 6, 2 ,2 2 ".parse().unwrap();
        assert_eq!(h.dice(), [6, 6, 2, 2, 2]);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "1,2,x,4,5".parse::<Hand>(),
            Err(HandError::Parse {
                token: "x".to_string()
            })
        );
        assert_eq!(
            "1,2,3".parse::<Hand>(),
            Err(HandError::InvalidLength { actual: 3 })
        );
        assert_eq!(
            "1 2 3 4 8".parse::<Hand>(),
            Err(HandError::FaceOutOfRange { index: 4, face: 8 })
        );
    }

    #[test]
    fn display_roundtrips_through_parse() {
        let h = Hand::new(&[3, 1, 4, 1, 5]).unwrap();
        assert_eq!(h.to_string(), "3,1,4,1,5");
        assert_eq!(h.to_string().parse::<Hand>().unwrap(), h);
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let h = Hand::new(&[2, 2, 3, 3, 6]).unwrap();
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, "[2,2,3,3,6]");
        assert_eq!(serde_json::from_str::<Hand>(&json).unwrap(), h);

        assert!(serde_json::from_str::<Hand>("[1,2,3,4]").is_err());
        assert!(serde_json::from_str::<Hand>("[1,2,3,4,0]").is_err());
    }

    #[test]
    fn occurrences_count_each_face() {
        let occ = Hand::new(&[5, 3, 3, 3, 5]).unwrap().occurrences();
        assert_eq!(occ.as_array(), [0, 0, 3, 0, 2, 0]);
        assert_eq!(occ.count(Face::Three), 3);
        assert_eq!(occ.count(Face::Six), 0);
    }

    #[test]
    fn faces_with_at_least_scans_high_to_low() {
        let occ = Hand::new(&[2, 2, 6, 6, 4]).unwrap().occurrences();
        let pairs: Vec<Face> = occ.faces_with_at_least(2).collect();
        assert_eq!(pairs, vec![Face::Six, Face::Two]);
        assert_eq!(occ.faces_with_at_least(3).next(), None);
    }

    #[test]
    fn each_exactly_once() {
        let occ = Hand::new(&[5, 4, 3, 2, 1]).unwrap().occurrences();
        let low = [Face::One, Face::Two, Face::Three, Face::Four, Face::Five];
        assert!(occ.each_exactly_once(&low));
        assert!(!occ.each_exactly_once(&[Face::Six]));
    }

    #[test]
    fn sum_of_dice() {
        assert_eq!(Hand::new(&[6, 6, 6, 6, 6]).unwrap().sum(), 30);
    }
}
