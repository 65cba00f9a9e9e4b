use rayscode::lang::{lex, LexError, Opcode, Program};

#[test]
fn test_canonical_round_trip() {
    let p = lex("two 3 + VAR x = IF a DUP ENDIF a LOOP l INF IF q ENDLOOP l ENDIF q FUNC VAR f PARAM * ENDFUNC").unwrap();
    let canonical = p.to_string();
    assert_eq!(
        canonical,
        "TWO THREE ADD VARIABLE x ASSIGNMENT IF a DUPLICATE ENDIF a STARTLOOP l INFINITY \
         IF q ENDLOOP l ENDIF q STARTFUNC VARIABLE f PARAM MULTIPLY ENDFUNC"
    );
    assert_eq!(lex(&canonical).unwrap(), p);
}

#[test]
fn test_case_insensitive() {
    let p = lex("Two tHrEe add").unwrap();
    let ops: Vec<&Opcode> = p.iter().map(|t| t.opcode()).collect();
    assert_eq!(ops, vec![&Opcode::Two, &Opcode::Three, &Opcode::Add]);
}

#[test]
fn test_id_is_taken_verbatim() {
    let p = lex("VAR TWO VAR Two").unwrap();
    assert_eq!(p.len(), 2);
    assert!(p.get(0).unwrap().is(&Opcode::Variable, "TWO"));
    assert!(p.get(1).unwrap().is(&Opcode::Variable, "Two"));
}

#[test]
fn test_whitespace() {
    let p = lex("  TWO\n\tTHREE\r\n  ").unwrap();
    assert_eq!(p.len(), 2);
}

#[test]
fn test_unknown_token() {
    assert_eq!(
        lex("TWO THREE rays2"),
        Err(LexError::UnknownToken("rays2".to_string(), 3))
    );
    // Ids count as words.
    assert_eq!(
        lex("IF a FOUR"),
        Err(LexError::UnknownToken("FOUR".to_string(), 3))
    );
}

#[test]
fn test_missing_block_id() {
    assert_eq!(
        lex("TWO ENDLOOP"),
        Err(LexError::MissingBlockId(Opcode::EndLoop, 2))
    );
}

#[test]
fn test_from_str() {
    let p: Program = "SIZE SIZE".parse().unwrap();
    assert_eq!(p.to_string(), "SIZE SIZE");
    assert!("SIZE HUGE".parse::<Program>().is_err());
}
