//! Schema text fixtures.
//!
//! Each fixture depends only on the built-in definitions, the core schema
//! and the fixtures listed before it.

/// inetOrgPerson attribute types and object class in OpenLDAP file format.
pub const INET_ORG_PERSON: &str = include_str!("../fixtures/inetorgperson.schema");

/// Content rule, name forms and structure rules over the core classes.
pub const DIT_RULES: &str = "\
dITContentRules: ( 2.5.6.5 NAME 'ouContentRule'
  AUX dcObject MAY seeAlso NOT userPassword )

nameForms: ( 1.3.6.1.4.1.99999.2.1 NAME 'ouNameForm'
  OC organizationalUnit MUST ou )
nameForms: ( 1.3.6.1.4.1.99999.2.2 NAME 'personNameForm'
  OC person MUST cn MAY uid )

dITStructureRules: ( 1 NAME 'ouRule' FORM ouNameForm SUP 1 )
dITStructureRules: ( 2 NAME 'personRule' FORM personNameForm SUP 1 )
";

/// Abstract diamond: `bottom` reaches `base` through `left` and `right`.
pub const DIAMOND: &str = "\
objectClasses: ( 1.3.6.1.4.1.99999.3.1 NAME 'base' ABSTRACT MUST cn )
objectClasses: ( 1.3.6.1.4.1.99999.3.2 NAME 'left' SUP base ABSTRACT MAY description )
objectClasses: ( 1.3.6.1.4.1.99999.3.3 NAME 'right' SUP base ABSTRACT MAY description )
objectClasses: ( 1.3.6.1.4.1.99999.3.4 NAME 'bottom' SUP ( left $ right ) STRUCTURAL )
";

/// Three-level attribute type chain: `c` under `b` under `a`.
pub const ATTRIBUTE_CHAIN: &str = "\
attributeTypes: ( 1.3.6.1.4.1.99999.1.1 NAME 'a'
  EQUALITY caseIgnoreMatch SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )
attributeTypes: ( 1.3.6.1.4.1.99999.1.2 NAME 'b' SUP a )
attributeTypes: ( 1.3.6.1.4.1.99999.1.3 NAME 'c' SUP b )
";

/// One canonical definition per kind, as the registry writes them.
pub const CANONICAL: [&str; 8] = [
    "( 1.3.6.1.4.1.99999.9.1 DESC 'Postal Code' X-PATTERN '[0-9]{5}' )",
    "( 1.3.6.1.4.1.99999.9.2 NAME 'postalCodeMatch' DESC 'five digits' \
     SYNTAX 1.3.6.1.4.1.99999.9.1 )",
    "( 2.5.4.3 NAME ( 'cn' 'commonName' ) DESC 'common name' SUP name \
     EQUALITY caseIgnoreMatch SYNTAX 1.3.6.1.4.1.1466.115.121.1.15{64} X-ORIGIN 'RFC 4519' )",
    "( 2.5.13.2 NAME 'caseIgnoreMatch' APPLIES ( cn $ sn $ name ) )",
    "( 2.5.6.6 NAME 'person' SUP top STRUCTURAL MUST ( sn $ cn ) \
     MAY ( userPassword $ telephoneNumber ) )",
    "( 2.5.6.5 NAME 'ouContentRule' AUX dcObject MAY seeAlso NOT userPassword )",
    "( 1.3.6.1.4.1.99999.2.1 NAME 'ouNameForm' OC organizationalUnit MUST ou )",
    "( 1 NAME 'ouRule' FORM ouNameForm SUP ( 1 $ 2 ) )",
];
