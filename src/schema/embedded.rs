//! Built-in schema definitions embedded in the library.
//!
//! The standard LDAP syntaxes and matching rules every registry is primed
//! with, plus a small core schema of RFC 4512/4519 attribute types and object
//! classes that callers may load on top with
//! [`SchemaRegistry::load_str`](super::SchemaRegistry::load_str).

/// Standard LDAP syntaxes (RFC 4517, RFC 4530, RFC 2307).
pub const LDAP_SYNTAXES: &[&str] = &[
    "( 1.3.6.1.4.1.1466.115.121.1.1 DESC 'ACI Item' X-NOT-HUMAN-READABLE 'TRUE' )",
    "( 1.3.6.1.4.1.1466.115.121.1.2 DESC 'Access Point' )",
    "( 1.3.6.1.4.1.1466.115.121.1.3 DESC 'Attribute Type Description' )",
    "( 1.3.6.1.4.1.1466.115.121.1.4 DESC 'Audio' X-NOT-HUMAN-READABLE 'TRUE' )",
    "( 1.3.6.1.4.1.1466.115.121.1.5 DESC 'Binary' X-NOT-HUMAN-READABLE 'TRUE' )",
    "( 1.3.6.1.4.1.1466.115.121.1.6 DESC 'Bit String' X-PATTERN '\\'[01]*\\'B' )",
    "( 1.3.6.1.4.1.1466.115.121.1.7 DESC 'Boolean' X-PATTERN 'TRUE|FALSE' )",
    "( 1.3.6.1.4.1.1466.115.121.1.8 DESC 'Certificate' X-NOT-HUMAN-READABLE 'TRUE' )",
    "( 1.3.6.1.4.1.1466.115.121.1.9 DESC 'Certificate List' X-NOT-HUMAN-READABLE 'TRUE' )",
    "( 1.3.6.1.4.1.1466.115.121.1.10 DESC 'Certificate Pair' X-NOT-HUMAN-READABLE 'TRUE' )",
    "( 1.3.6.1.4.1.1466.115.121.1.11 DESC 'Country String' X-PATTERN '[A-Za-z]{2}' )",
    "( 1.3.6.1.4.1.1466.115.121.1.12 DESC 'DN' )",
    "( 1.3.6.1.4.1.1466.115.121.1.13 DESC 'Data Quality Syntax' )",
    "( 1.3.6.1.4.1.1466.115.121.1.14 DESC 'Delivery Method' )",
    "( 1.3.6.1.4.1.1466.115.121.1.15 DESC 'Directory String' )",
    "( 1.3.6.1.4.1.1466.115.121.1.16 DESC 'DIT Content Rule Description' )",
    "( 1.3.6.1.4.1.1466.115.121.1.17 DESC 'DIT Structure Rule Description' )",
    "( 1.3.6.1.4.1.1466.115.121.1.18 DESC 'DL Submit Permission' )",
    "( 1.3.6.1.4.1.1466.115.121.1.19 DESC 'DSA Quality Syntax' )",
    "( 1.3.6.1.4.1.1466.115.121.1.20 DESC 'DSE Type' )",
    "( 1.3.6.1.4.1.1466.115.121.1.21 DESC 'Enhanced Guide' )",
    "( 1.3.6.1.4.1.1466.115.121.1.22 DESC 'Facsimile Telephone Number' )",
    "( 1.3.6.1.4.1.1466.115.121.1.23 DESC 'Fax' X-NOT-HUMAN-READABLE 'TRUE' )",
    "( 1.3.6.1.4.1.1466.115.121.1.24 DESC 'Generalized Time' \
       X-PATTERN '[0-9]{10}([0-9]{2}([0-9]{2})?)?([.,][0-9]+)?(Z|[+-][0-9]{2}([0-9]{2})?)' )",
    "( 1.3.6.1.4.1.1466.115.121.1.25 DESC 'Guide' )",
    "( 1.3.6.1.4.1.1466.115.121.1.26 DESC 'IA5 String' X-PATTERN '[[:ascii:]]*' )",
    "( 1.3.6.1.4.1.1466.115.121.1.27 DESC 'INTEGER' X-PATTERN '0|-?[1-9][0-9]*' )",
    "( 1.3.6.1.4.1.1466.115.121.1.28 DESC 'JPEG' X-NOT-HUMAN-READABLE 'TRUE' )",
    "( 1.3.6.1.4.1.1466.115.121.1.29 DESC 'Master And Shadow Access Points' )",
    "( 1.3.6.1.4.1.1466.115.121.1.30 DESC 'Matching Rule Description' )",
    "( 1.3.6.1.4.1.1466.115.121.1.31 DESC 'Matching Rule Use Description' )",
    "( 1.3.6.1.4.1.1466.115.121.1.32 DESC 'Mail Preference' )",
    "( 1.3.6.1.4.1.1466.115.121.1.33 DESC 'MHS OR Address' )",
    "( 1.3.6.1.4.1.1466.115.121.1.34 DESC 'Name And Optional UID' )",
    "( 1.3.6.1.4.1.1466.115.121.1.35 DESC 'Name Form Description' )",
    "( 1.3.6.1.4.1.1466.115.121.1.36 DESC 'Numeric String' X-PATTERN '[0-9 ]+' )",
    "( 1.3.6.1.4.1.1466.115.121.1.37 DESC 'Object Class Description' )",
    "( 1.3.6.1.4.1.1466.115.121.1.38 DESC 'OID' \
       X-PATTERN '[0-9]+([.][0-9]+)+|[A-Za-z][A-Za-z0-9-]*' )",
    "( 1.3.6.1.4.1.1466.115.121.1.39 DESC 'Other Mailbox' )",
    "( 1.3.6.1.4.1.1466.115.121.1.40 DESC 'Octet String' )",
    "( 1.3.6.1.4.1.1466.115.121.1.41 DESC 'Postal Address' )",
    "( 1.3.6.1.4.1.1466.115.121.1.42 DESC 'Protocol Information' )",
    "( 1.3.6.1.4.1.1466.115.121.1.43 DESC 'Presentation Address' )",
    "( 1.3.6.1.4.1.1466.115.121.1.44 DESC 'Printable String' \
       X-PATTERN '[A-Za-z0-9\\'()+,./:? =-]+' )",
    "( 1.3.6.1.4.1.1466.115.121.1.45 DESC 'Subtree Specification' )",
    "( 1.3.6.1.4.1.1466.115.121.1.46 DESC 'Supplier Information' )",
    "( 1.3.6.1.4.1.1466.115.121.1.47 DESC 'Supplier Or Consumer' )",
    "( 1.3.6.1.4.1.1466.115.121.1.48 DESC 'Supplier And Consumer' )",
    "( 1.3.6.1.4.1.1466.115.121.1.49 DESC 'Supported Algorithm' X-NOT-HUMAN-READABLE 'TRUE' )",
    "( 1.3.6.1.4.1.1466.115.121.1.50 DESC 'Telephone Number' )",
    "( 1.3.6.1.4.1.1466.115.121.1.51 DESC 'Teletex Terminal Identifier' )",
    "( 1.3.6.1.4.1.1466.115.121.1.52 DESC 'Telex Number' )",
    "( 1.3.6.1.4.1.1466.115.121.1.53 DESC 'UTC Time' )",
    "( 1.3.6.1.4.1.1466.115.121.1.54 DESC 'LDAP Syntax Description' )",
    "( 1.3.6.1.4.1.1466.115.121.1.55 DESC 'Modify Rights' )",
    "( 1.3.6.1.4.1.1466.115.121.1.56 DESC 'LDAP Schema Definition' )",
    "( 1.3.6.1.4.1.1466.115.121.1.57 DESC 'LDAP Schema Description' )",
    "( 1.3.6.1.4.1.1466.115.121.1.58 DESC 'Substring Assertion' )",
    "( 1.3.6.1.1.16.1 DESC 'UUID' \
       X-PATTERN '[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}' )",
    "( 1.3.6.1.1.1.0.0 DESC 'RFC2307 NIS Netgroup Triple' )",
    "( 1.3.6.1.1.1.0.1 DESC 'RFC2307 Boot Parameter' )",
];

/// Standard matching rules (RFC 4517, RFC 4530, RFC 3698, Active Directory bit rules).
pub const MATCHING_RULES: &[&str] = &[
    "( 2.5.13.0 NAME 'objectIdentifierMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.38 )",
    "( 2.5.13.1 NAME 'distinguishedNameMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.12 )",
    "( 2.5.13.2 NAME 'caseIgnoreMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )",
    "( 2.5.13.3 NAME 'caseIgnoreOrderingMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )",
    "( 2.5.13.4 NAME 'caseIgnoreSubstringsMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.58 )",
    "( 2.5.13.5 NAME 'caseExactMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )",
    "( 2.5.13.6 NAME 'caseExactOrderingMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )",
    "( 2.5.13.7 NAME 'caseExactSubstringsMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.58 )",
    "( 2.5.13.8 NAME 'numericStringMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.36 )",
    "( 2.5.13.9 NAME 'numericStringOrderingMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.36 )",
    "( 2.5.13.10 NAME 'numericStringSubstringsMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.58 )",
    "( 2.5.13.11 NAME 'caseIgnoreListMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.41 )",
    "( 2.5.13.12 NAME 'caseIgnoreListSubstringsMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.58 )",
    "( 2.5.13.13 NAME 'booleanMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.7 )",
    "( 2.5.13.14 NAME 'integerMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.27 )",
    "( 2.5.13.15 NAME 'integerOrderingMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.27 )",
    "( 2.5.13.16 NAME 'bitStringMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.6 )",
    "( 2.5.13.17 NAME 'octetStringMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.40 )",
    "( 2.5.13.18 NAME 'octetStringOrderingMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.40 )",
    "( 2.5.13.20 NAME 'telephoneNumberMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.50 )",
    "( 2.5.13.21 NAME 'telephoneNumberSubstringsMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.58 )",
    "( 2.5.13.22 NAME 'presentationAddressMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.43 )",
    "( 2.5.13.23 NAME 'uniqueMemberMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.34 )",
    "( 2.5.13.24 NAME 'protocolInformationMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.42 )",
    "( 2.5.13.25 NAME 'uTCTimeMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.53 )",
    "( 2.5.13.26 NAME 'uTCTimeOrderingMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.53 )",
    "( 2.5.13.27 NAME 'generalizedTimeMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.24 )",
    "( 2.5.13.28 NAME 'generalizedTimeOrderingMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.24 )",
    "( 2.5.13.29 NAME 'integerFirstComponentMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.27 )",
    "( 2.5.13.30 NAME 'objectIdentifierFirstComponentMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.38 )",
    "( 2.5.13.31 NAME 'directoryStringFirstComponentMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )",
    "( 2.5.13.32 NAME 'wordMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )",
    "( 2.5.13.33 NAME 'keywordMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )",
    "( 1.3.6.1.4.1.1466.109.114.1 NAME 'caseExactIA5Match' SYNTAX 1.3.6.1.4.1.1466.115.121.1.26 )",
    "( 1.3.6.1.4.1.1466.109.114.2 NAME 'caseIgnoreIA5Match' SYNTAX 1.3.6.1.4.1.1466.115.121.1.26 )",
    "( 1.3.6.1.4.1.1466.109.114.3 NAME 'caseIgnoreIA5SubstringsMatch' \
       SYNTAX 1.3.6.1.4.1.1466.115.121.1.58 )",
    "( 1.3.6.1.1.16.2 NAME 'uuidMatch' SYNTAX 1.3.6.1.1.16.1 )",
    "( 1.3.6.1.1.16.3 NAME 'uuidOrderingMatch' SYNTAX 1.3.6.1.1.16.1 )",
    "( 1.3.6.1.4.1.4203.1.2.1 NAME 'caseExactIA5SubstringsMatch' \
       SYNTAX 1.3.6.1.4.1.1466.115.121.1.58 )",
    "( 1.2.840.113556.1.4.803 NAME 'integerBitAndMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.27 )",
    "( 1.2.840.113556.1.4.804 NAME 'integerBitOrMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.27 )",
];

/// Core attribute types and object classes from RFC 4512 and RFC 4519.
///
/// Definitions are ordered so that dependencies precede dependents.
pub fn core_schema() -> &'static str {
    r#"# RFC 4512 operational attributes
attributeTypes: ( 2.5.4.0 NAME 'objectClass'
  EQUALITY objectIdentifierMatch
  SYNTAX 1.3.6.1.4.1.1466.115.121.1.38 )
attributeTypes: ( 2.5.18.1 NAME 'createTimestamp'
  EQUALITY generalizedTimeMatch ORDERING generalizedTimeOrderingMatch
  SYNTAX 1.3.6.1.4.1.1466.115.121.1.24
  SINGLE-VALUE NO-USER-MODIFICATION USAGE directoryOperation )
attributeTypes: ( 2.5.18.2 NAME 'modifyTimestamp'
  EQUALITY generalizedTimeMatch ORDERING generalizedTimeOrderingMatch
  SYNTAX 1.3.6.1.4.1.1466.115.121.1.24
  SINGLE-VALUE NO-USER-MODIFICATION USAGE directoryOperation )
attributeTypes: ( 2.5.18.3 NAME 'creatorsName'
  EQUALITY distinguishedNameMatch
  SYNTAX 1.3.6.1.4.1.1466.115.121.1.12
  SINGLE-VALUE NO-USER-MODIFICATION USAGE directoryOperation )

# RFC 4519 user attributes
attributeTypes: ( 2.5.4.41 NAME 'name'
  EQUALITY caseIgnoreMatch SUBSTR caseIgnoreSubstringsMatch
  SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )
attributeTypes: ( 2.5.4.3 NAME ( 'cn' 'commonName' ) SUP name )
attributeTypes: ( 2.5.4.4 NAME ( 'sn' 'surname' ) SUP name )
attributeTypes: ( 2.5.4.42 NAME 'givenName' SUP name )
attributeTypes: ( 2.5.4.12 NAME 'title' SUP name )
attributeTypes: ( 2.5.4.10 NAME ( 'o' 'organizationName' ) SUP name )
attributeTypes: ( 2.5.4.11 NAME ( 'ou' 'organizationalUnitName' ) SUP name )
attributeTypes: ( 2.5.4.7 NAME ( 'l' 'localityName' ) SUP name )
attributeTypes: ( 2.5.4.13 NAME 'description'
  EQUALITY caseIgnoreMatch SUBSTR caseIgnoreSubstringsMatch
  SYNTAX 1.3.6.1.4.1.1466.115.121.1.15{1024} )
attributeTypes: ( 2.5.4.34 NAME 'seeAlso'
  EQUALITY distinguishedNameMatch
  SYNTAX 1.3.6.1.4.1.1466.115.121.1.12 )
attributeTypes: ( 2.5.4.35 NAME 'userPassword'
  EQUALITY octetStringMatch
  SYNTAX 1.3.6.1.4.1.1466.115.121.1.40 )
attributeTypes: ( 2.5.4.20 NAME 'telephoneNumber'
  EQUALITY telephoneNumberMatch SUBSTR telephoneNumberSubstringsMatch
  SYNTAX 1.3.6.1.4.1.1466.115.121.1.50{32} )
attributeTypes: ( 2.5.4.6 NAME ( 'c' 'countryName' ) SUP name
  SYNTAX 1.3.6.1.4.1.1466.115.121.1.11 SINGLE-VALUE )
attributeTypes: ( 0.9.2342.19200300.100.1.1 NAME ( 'uid' 'userid' )
  EQUALITY caseIgnoreMatch SUBSTR caseIgnoreSubstringsMatch
  SYNTAX 1.3.6.1.4.1.1466.115.121.1.15{256} )
attributeTypes: ( 0.9.2342.19200300.100.1.3 NAME ( 'mail' 'rfc822Mailbox' )
  EQUALITY caseIgnoreIA5Match SUBSTR caseIgnoreIA5SubstringsMatch
  SYNTAX 1.3.6.1.4.1.1466.115.121.1.26{256} )
attributeTypes: ( 0.9.2342.19200300.100.1.25 NAME ( 'dc' 'domainComponent' )
  EQUALITY caseIgnoreIA5Match SUBSTR caseIgnoreIA5SubstringsMatch
  SYNTAX 1.3.6.1.4.1.1466.115.121.1.26 SINGLE-VALUE )
attributeTypes: ( 2.5.4.49 NAME 'distinguishedName'
  EQUALITY distinguishedNameMatch
  SYNTAX 1.3.6.1.4.1.1466.115.121.1.12 )
attributeTypes: ( 2.5.4.31 NAME 'member' SUP distinguishedName )

# RFC 4519 object classes
objectClasses: ( 2.5.6.0 NAME 'top' ABSTRACT MUST objectClass )
objectClasses: ( 1.3.6.1.4.1.1466.101.120.111 NAME 'extensibleObject'
  SUP top AUXILIARY )
objectClasses: ( 2.5.6.2 NAME 'country' SUP top STRUCTURAL
  MUST c MAY description )
objectClasses: ( 2.5.6.3 NAME 'locality' SUP top STRUCTURAL
  MAY ( l $ description $ seeAlso ) )
objectClasses: ( 2.5.6.4 NAME 'organization' SUP top STRUCTURAL
  MUST o MAY ( userPassword $ seeAlso $ telephoneNumber $ l $ description ) )
objectClasses: ( 2.5.6.5 NAME 'organizationalUnit' SUP top STRUCTURAL
  MUST ou MAY ( userPassword $ seeAlso $ telephoneNumber $ l $ description ) )
objectClasses: ( 2.5.6.6 NAME 'person' SUP top STRUCTURAL
  MUST ( sn $ cn ) MAY ( userPassword $ telephoneNumber $ seeAlso $ description ) )
objectClasses: ( 2.5.6.7 NAME 'organizationalPerson' SUP person STRUCTURAL
  MAY ( title $ ou $ l $ givenName ) )
objectClasses: ( 2.5.6.9 NAME 'groupOfNames' SUP top STRUCTURAL
  MUST ( member $ cn ) MAY ( o $ ou $ seeAlso $ description ) )
objectClasses: ( 1.3.6.1.4.1.1466.344 NAME 'dcObject' SUP top AUXILIARY MUST dc )
objectClasses: ( 0.9.2342.19200300.100.4.5 NAME 'account' SUP top STRUCTURAL
  MUST uid MAY ( description $ seeAlso $ l $ o $ ou ) )
"#
}
